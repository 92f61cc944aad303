//! Stacked card carousel that periodically brings the next card forward

use leptos::prelude::*;

use crate::core::{CardSwapConfig, CardSwapDeck};

/// Timer resolution for the swap countdown, in ms
#[cfg(not(feature = "ssr"))]
const SWAP_TICK_MS: u32 = 100;

/// One card in the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapCard {
    pub title: &'static str,
    pub body: &'static str,
    pub step: &'static str,
}

/// Skewed stack of cards; the front card moves to the back every `delay_ms`
#[component]
pub fn CardSwap(
    cards: &'static [SwapCard],
    #[prop(optional)] config: Option<CardSwapConfig>,
) -> impl IntoView {
    let deck = RwSignal::new(CardSwapDeck::new(config.unwrap_or_default(), cards.len()));

    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::callback::Interval;

        let interval = StoredValue::new_local(Some(Interval::new(SWAP_TICK_MS, move || {
            deck.try_update(|d| d.tick(SWAP_TICK_MS as f64));
        })));

        on_cleanup(move || {
            interval.try_update_value(|slot| slot.take());
        });
    }

    view! {
        <div
            class="relative h-[360px] card-swap-stage"
            on:mouseenter=move |_| deck.update(|d| d.pointer_enter())
            on:mouseleave=move |_| deck.update(|d| d.pointer_leave())
        >
            {cards
                .iter()
                .enumerate()
                .map(|(index, card)| {
                    let style = move || {
                        deck.with(|d| {
                            d.slot_of(index)
                                .map(|slot| slot.css_style(d.config().skew_degrees))
                                .unwrap_or_default()
                        })
                    };
                    let is_front = move || deck.with(|d| d.front() == Some(index));
                    view! {
                        <div
                            class="card-swap-card absolute top-1/2 left-1/2 w-80 h-56 p-6 rounded-2xl border border-theme bg-theme-primary shadow-2xl"
                            class:card-swap-front=is_front
                            style=style
                        >
                            <span class="text-xs font-semibold uppercase tracking-wide text-accent-primary">
                                {card.step}
                            </span>
                            <h3 class="text-xl font-bold text-theme-primary mt-2 mb-3">{card.title}</h3>
                            <p class="text-sm text-theme-secondary leading-relaxed">{card.body}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
