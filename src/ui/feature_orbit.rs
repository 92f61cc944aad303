//! Rotating feature carousel
//!
//! Feature cards orbit a virtual circle. The frontmost card's details are
//! shown in a caption panel next to the ring.

use leptos::prelude::*;

use crate::core::{FEATURES, Feature, FeatureWidget, OrbitAnimator, OrbitConfig};
use crate::ui::icon::Icon;

/// Orbiting feature cards with a caption for the active one
#[component]
pub fn FeatureOrbit(
    /// Orbit geometry and speed
    #[prop(optional)]
    config: Option<OrbitConfig>,
) -> impl IntoView {
    let animator = RwSignal::new(OrbitAnimator::new(
        config.unwrap_or_default(),
        FEATURES.len(),
    ));
    let active = RwSignal::new(animator.with_untracked(|a| a.frontmost().unwrap_or(0)));

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::FrameClock;
        use crate::ui::animation::FrameLoop;

        animator.update(|a| a.start());

        let mut clock = FrameClock::default();
        let frame_loop = StoredValue::new_local(FrameLoop::start(move |timestamp| {
            let delta = clock.tick(timestamp);
            if let Some(Some(index)) = animator.try_update(|a| a.advance(delta)) {
                active.set(index);
            }
        }));

        on_cleanup(move || {
            animator.try_update(|a| a.stop());
            frame_loop.try_with_value(|l| l.stop());
        });
    }

    view! {
        <div class="grid lg:grid-cols-2 gap-12 items-center">
            <div class="relative h-[420px] orbit-stage" aria-hidden="true">
                {FEATURES
                    .iter()
                    .enumerate()
                    .map(|(index, feature)| {
                        let style = move || animator.with(|a| a.transform(index).css_style());
                        let is_active = move || active.get() == index;
                        view! {
                            <div class="orbit-card" class:orbit-card-active=is_active style=style>
                                <OrbitCard feature=*feature />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div>
                {move || {
                    let feature = FEATURES[active.get().min(FEATURES.len() - 1)];
                    view! {
                        <div class="p-8 rounded-2xl border border-theme bg-theme-primary shadow-xl">
                            <div
                                class="w-12 h-12 rounded-lg flex items-center justify-center mb-4"
                                style=format!("background-color: {}22;", feature.color.hex())
                            >
                                <Icon name=feature.icon class="w-6 h-6" />
                            </div>
                            <h3 class="text-2xl font-bold text-theme-primary mb-2">{feature.title}</h3>
                            <p class="text-sm font-medium mb-4" style=format!("color: {};", feature.color.hex())>
                                {feature.short}
                            </p>
                            <p class="text-theme-secondary leading-relaxed">{feature.detail}</p>
                        </div>
                    }
                }}
                <div class="flex gap-2 mt-6 justify-center">
                    {(0..FEATURES.len())
                        .map(|index| {
                            view! {
                                <span
                                    class="w-2 h-2 rounded-full transition-colors"
                                    class:bg-accent-primary=move || active.get() == index
                                    class:bg-gray-300=move || active.get() != index
                                ></span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

/// A single card on the ring
#[component]
fn OrbitCard(feature: Feature) -> impl IntoView {
    view! {
        <div
            class="w-56 p-5 rounded-xl bg-theme-primary border border-theme shadow-lg"
            style=format!("box-shadow: 0 10px 40px {}33;", feature.color.hex())
        >
            <div class="flex items-center gap-3 mb-3">
                <Icon name=feature.icon class="w-5 h-5" />
                <span class="font-semibold text-theme-primary">{feature.title}</span>
            </div>
            <FeaturePreview widget=feature.widget color=feature.color.hex() />
        </div>
    }
}

/// Small mock UI inside a card
#[component]
fn FeaturePreview(widget: FeatureWidget, color: &'static str) -> impl IntoView {
    match widget {
        FeatureWidget::BookingCalendar => view! {
            <div class="grid grid-cols-7 gap-1">
                {(0..14)
                    .map(|day| {
                        let booked = matches!(day, 2 | 5 | 8 | 9 | 12);
                        view! {
                            <span
                                class="h-4 rounded-sm bg-gray-200"
                                style=if booked { format!("background-color: {};", color) } else { String::new() }
                            ></span>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        FeatureWidget::InvoiceSummary => view! {
            <div class="space-y-1 text-xs text-theme-secondary">
                <div class="flex justify-between"><span>"INV-1042"</span><span>"$240.00"</span></div>
                <div class="flex justify-between"><span>"INV-1043"</span><span>"$85.50"</span></div>
                <div class="flex justify-between font-semibold" style=format!("color: {};", color)>
                    <span>"Paid"</span><span>"$325.50"</span>
                </div>
            </div>
        }
        .into_any(),
        FeatureWidget::ReminderFeed => view! {
            <ul class="space-y-1 text-xs text-theme-secondary">
                <li>"SMS sent to Maria, 9:00"</li>
                <li>"Email sent to Tom, 11:30"</li>
                <li style=format!("color: {};", color)>"2 confirmations today"</li>
            </ul>
        }
        .into_any(),
        FeatureWidget::RevenueChart => view! {
            <div class="flex items-end gap-1 h-12">
                {[30u8, 45, 38, 60, 52, 75, 90]
                    .into_iter()
                    .map(|height| {
                        view! {
                            <span
                                class="flex-1 rounded-t-sm"
                                style=format!("height: {}%; background-color: {};", height, color)
                            ></span>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        FeatureWidget::TeamRoster => view! {
            <div class="flex -space-x-2">
                {["AK", "JL", "MR", "SP"]
                    .into_iter()
                    .map(|initials| {
                        view! {
                            <span
                                class="w-7 h-7 rounded-full text-[10px] text-white flex items-center justify-center border-2 border-white"
                                style=format!("background-color: {};", color)
                            >
                                {initials}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        FeatureWidget::PaymentBadge => view! {
            <div class="flex items-center justify-between text-xs">
                <span class="text-theme-secondary">"Deposit"</span>
                <span class="px-2 py-0.5 rounded-full text-white" style=format!("background-color: {};", color)>
                    "$20 received"
                </span>
            </div>
        }
        .into_any(),
    }
}
