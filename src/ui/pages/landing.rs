//! Landing page component
//!
//! Marketing page for Brightline:
//! - SEO meta tags
//! - Hero section with the demo request form
//! - Orbiting feature carousel with a caption for the active feature
//! - "How it works" card-swap stack
//! - Pricing section with a monthly/annual toggle
//! - FAQ accordion
//! - Footer

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use leptos_router::components::A;

use crate::core::{BillingCycle, FAQ_ENTRIES, FaqAccordion, PRICING_PLANS, PricingPlan};
use crate::ui::card_swap::{CardSwap, SwapCard};
use crate::ui::demo_form::DemoRequestForm;
use crate::ui::feature_orbit::FeatureOrbit;
use crate::ui::icon::{Icon, icons};

const ONBOARDING_STEPS: &[SwapCard] = &[
    SwapCard {
        step: "Step 1",
        title: "Set up your services",
        body: "Add what you offer, how long it takes and what it costs. Import existing clients from a CSV.",
    },
    SwapCard {
        step: "Step 2",
        title: "Share your booking page",
        body: "Put the link on your website, Instagram bio or Google profile. Customers book in under a minute.",
    },
    SwapCard {
        step: "Step 3",
        title: "Get paid automatically",
        body: "Deposits are taken at booking, invoices go out after the visit and reminders chase what is overdue.",
    },
    SwapCard {
        step: "Step 4",
        title: "Watch the numbers grow",
        body: "Track revenue, repeat customers and your busiest hours from one dashboard.",
    },
];

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <div class="min-h-screen bg-theme-primary overflow-x-hidden">
            <Header />

            // Hero Section
            <section class="min-h-screen flex items-center pt-24 pb-16 px-4 relative">
                <div class="max-w-6xl mx-auto grid lg:grid-cols-2 gap-12 items-center">
                    <div class="text-center lg:text-left">
                        <h1 class="text-5xl sm:text-6xl font-bold text-theme-primary mb-6 tracking-tight">
                            "Run your small business on autopilot"
                        </h1>
                        <p class="text-xl text-theme-secondary mb-8 leading-relaxed">
                            "Bookings, reminders, invoices and payments in one place. Spend less time on admin and more time with customers."
                        </p>
                        <div class="flex flex-col sm:flex-row items-center lg:justify-start justify-center gap-4">
                            <a href="#pricing" class="landing-btn-secondary">"See pricing"</a>
                            <a href="#features" class="text-theme-secondary hover:text-theme-primary font-medium">
                                "Explore features"
                            </a>
                        </div>
                    </div>

                    <div id="demo">
                        <DemoRequestForm />
                    </div>
                </div>

                <div class="absolute inset-0 -z-10 overflow-hidden" aria-hidden="true">
                    <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-accent-primary/5 rounded-full blur-3xl"></div>
                    <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-amber-500/5 rounded-full blur-3xl"></div>
                </div>
            </section>

            // Features Section
            <section id="features" class="py-20 px-4 bg-theme-secondary/10">
                <div class="max-w-6xl mx-auto">
                    <SectionHeading
                        title="Everything your front desk does, done for you"
                        subtitle="Six tools that work together, so nothing falls through the cracks."
                    />
                    <FeatureOrbit />
                </div>
            </section>

            // How It Works Section
            <section class="py-20 px-4">
                <div class="max-w-6xl mx-auto grid lg:grid-cols-2 gap-12 items-center">
                    <div>
                        <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                            "Up and running in an afternoon"
                        </h2>
                        <p class="text-lg text-theme-secondary">
                            "No consultants and no training days. Most businesses take their first online booking the day they sign up."
                        </p>
                    </div>
                    <CardSwap cards=ONBOARDING_STEPS />
                </div>
            </section>

            <PricingSection />

            <FaqSection />

            // CTA Section
            <section class="py-24 px-4 bg-gradient-to-b from-transparent to-theme-secondary/30">
                <div class="max-w-4xl mx-auto text-center">
                    <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                        "Ready to take back your evenings?"
                    </h2>
                    <p class="text-lg text-theme-secondary mb-8 max-w-xl mx-auto">
                        "Try Brightline free for 14 days, or let us show you around first."
                    </p>
                    <a href="#demo" class="landing-btn-primary">"Book a demo"</a>
                </div>
            </section>

            <Footer />

            <LandingStyles />
        </div>
    }
}

/// Centered section title with subtitle
#[component]
fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">{title}</h2>
            <p class="text-lg text-theme-secondary max-w-2xl mx-auto">{subtitle}</p>
        </div>
    }
}

/// Header component with mobile menu support
#[component]
fn Header() -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    let links = [
        ("#features", "Features"),
        ("#pricing", "Pricing"),
        ("#faq", "FAQ"),
    ];

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-theme-primary/80 backdrop-blur-md border-b border-theme/50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <Icon name=icons::LOGO class="w-9 h-9" />
                        <span class="text-xl font-bold text-theme-primary">"Brightline"</span>
                    </A>

                    <nav class="hidden md:flex items-center gap-6">
                        {links
                            .into_iter()
                            .map(|(href, label)| view! {
                                <a href=href class="text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors">
                                    {label}
                                </a>
                            })
                            .collect_view()}
                        <a href="#demo" class="landing-btn-primary landing-btn-small">"Book a demo"</a>
                    </nav>

                    <button
                        class="md:hidden p-2 rounded-lg hover:bg-gray-200 transition-colors"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Toggle menu"
                        aria-expanded=move || mobile_menu_open.get()
                    >
                        {move || {
                            let icon = if mobile_menu_open.get() { icons::X } else { icons::MENU };
                            view! { <Icon name=icon class="w-6 h-6" /> }
                        }}
                    </button>
                </div>

                <div
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !mobile_menu_open.get()
                    class:max-h-96=move || mobile_menu_open.get()
                >
                    <nav class="py-4 flex flex-col gap-2 border-t border-theme/50">
                        {links
                            .into_iter()
                            .map(|(href, label)| view! {
                                <a
                                    href=href
                                    class="block px-4 py-2 text-sm font-medium text-theme-secondary hover:text-theme-primary rounded-lg"
                                    on:click=move |_| set_mobile_menu_open.set(false)
                                >
                                    {label}
                                </a>
                            })
                            .collect_view()}
                    </nav>
                </div>
            </div>
        </header>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    let description = "Online booking, reminders, invoicing and payments for small businesses.";

    view! {
        <Title text="Brightline - Booking and invoicing for small businesses" />
        <Meta name="description" content=description />

        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Brightline" />
        <Meta property="og:description" content=description />
        <Meta property="og:image" content="/og-image.png" />

        <Meta property="twitter:card" content="summary_large_image" />

        <Link rel="canonical" href="/" />
    }
}

/// Pricing section with billing toggle
#[component]
fn PricingSection() -> impl IntoView {
    let cycle = RwSignal::new(BillingCycle::default());

    view! {
        <section id="pricing" class="py-20 px-4 bg-theme-secondary/10">
            <div class="max-w-6xl mx-auto">
                <SectionHeading
                    title="Simple pricing that grows with you"
                    subtitle="Every plan starts with a 14-day free trial."
                />

                <div class="flex items-center justify-center gap-3 mb-12">
                    <span class:font-semibold=move || cycle.get() == BillingCycle::Monthly>
                        {BillingCycle::Monthly.label()}
                    </span>
                    <button
                        class="relative w-14 h-7 rounded-full bg-accent-primary/20 transition-colors"
                        role="switch"
                        aria-checked=move || (cycle.get() == BillingCycle::Annual).to_string()
                        aria-label="Toggle annual billing"
                        on:click=move |_| cycle.update(|c| *c = c.toggled())
                    >
                        <span
                            class="absolute top-1 left-1 w-5 h-5 rounded-full bg-accent-primary transition-transform"
                            class:translate-x-7=move || cycle.get() == BillingCycle::Annual
                        ></span>
                    </button>
                    <span class:font-semibold=move || cycle.get() == BillingCycle::Annual>
                        {BillingCycle::Annual.label()}
                    </span>
                    <span class="text-xs font-medium px-2 py-1 rounded-full bg-green-100 text-green-700">
                        {format!("Save {}%", crate::core::content::ANNUAL_DISCOUNT_PERCENT)}
                    </span>
                </div>

                <div class="grid md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                    {PRICING_PLANS
                        .iter()
                        .map(|plan| view! { <PricingCard plan=*plan cycle=cycle.into() /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Pricing card component
#[component]
fn PricingCard(plan: PricingPlan, cycle: Signal<BillingCycle>) -> impl IntoView {
    let card_class = if plan.highlighted {
        "relative bg-theme-primary p-8 rounded-2xl border-2 border-accent-primary shadow-xl scale-105"
    } else {
        "bg-theme-primary p-8 rounded-2xl border border-theme hover:border-theme-secondary transition-colors"
    };

    view! {
        <div class=card_class>
            {plan.highlighted.then(|| view! {
                <div class="absolute -top-4 left-1/2 -translate-x-1/2 px-4 py-1 bg-accent-primary text-white text-sm font-medium rounded-full">
                    "Most Popular"
                </div>
            })}

            <div class="text-center mb-6">
                <h3 class="text-xl font-bold text-theme-primary mb-2">{plan.name}</h3>
                <div class="flex items-baseline justify-center gap-1">
                    <span class="text-4xl font-bold text-theme-primary">
                        {move || plan.display_price(cycle.get())}
                    </span>
                    <span class="text-theme-secondary text-sm">{move || cycle.get().period_note()}</span>
                </div>
                <p class="text-sm text-theme-secondary mt-2">{plan.tagline}</p>
                <p class="text-xs text-green-600 mt-1 h-4">
                    {move || (cycle.get() == BillingCycle::Annual).then(|| {
                        format!(
                            "You save {} a year",
                            crate::core::content::format_cents(plan.annual_savings_cents())
                        )
                    })}
                </p>
            </div>

            <ul class="space-y-3 mb-8">
                {plan
                    .features
                    .iter()
                    .map(|feature| view! {
                        <li class="flex items-center gap-3">
                            <Icon name=icons::CHECK class="w-5 h-5 flex-shrink-0" />
                            <span class="text-theme-primary">{*feature}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>

            <a
                href="#demo"
                class=if plan.highlighted { "landing-btn-primary block text-center" } else { "landing-btn-secondary block text-center" }
            >
                "Start free trial"
            </a>
        </div>
    }
}

/// FAQ section component
#[component]
fn FaqSection() -> impl IntoView {
    let accordion = RwSignal::new(FaqAccordion::default());

    view! {
        <section id="faq" class="py-20 px-4">
            <div class="max-w-3xl mx-auto">
                <SectionHeading
                    title="Frequently Asked Questions"
                    subtitle="Got questions? We've got answers."
                />

                <div class="space-y-4">
                    {FAQ_ENTRIES
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| view! {
                            <FaqItem
                                question=entry.question
                                answer=entry.answer
                                is_open=Signal::derive(move || accordion.with(|a| a.is_open(index)))
                                on_toggle=Callback::new(move |_| accordion.update(|a| a.toggle(index)))
                            />
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// FAQ accordion item component
#[component]
fn FaqItem(
    question: &'static str,
    answer: &'static str,
    is_open: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="border border-theme rounded-xl overflow-hidden">
            <button
                class="w-full px-6 py-4 flex items-center justify-between gap-4 text-left hover:bg-theme-secondary/30 transition-colors"
                on:click=move |_| on_toggle.run(())
                aria-expanded=move || is_open.get()
            >
                <span class="font-semibold text-theme-primary">{question}</span>
                <div
                    class="flex items-center justify-center w-5 h-5 flex-shrink-0 transition-transform duration-300"
                    class=("rotate-180", move || is_open.get())
                >
                    <Icon name=icons::CHEVRON_DOWN class="w-5 h-5" />
                </div>
            </button>
            <div
                class="overflow-hidden transition-all duration-300"
                class:max-h-0=move || !is_open.get()
                class:max-h-96=move || is_open.get()
            >
                <div class="px-6 pb-4 text-theme-secondary leading-relaxed">{answer}</div>
            </div>
        </div>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-theme bg-theme-primary">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex flex-col sm:flex-row items-center justify-between gap-4">
                <div class="flex items-center gap-3">
                    <Icon name=icons::LOGO class="w-8 h-8" />
                    <span class="font-bold text-theme-primary">"Brightline"</span>
                </div>
                <nav class="flex items-center gap-6 text-sm text-theme-secondary">
                    <a href="#features" class="hover:text-theme-primary">"Features"</a>
                    <a href="#pricing" class="hover:text-theme-primary">"Pricing"</a>
                    <a href="#faq" class="hover:text-theme-primary">"FAQ"</a>
                </nav>
                <span class="text-sm text-theme-tertiary">"© 2026 Brightline"</span>
            </div>
        </footer>
    }
}

/// CSS for buttons and the 3D carousels
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            .landing-btn-primary {
                display: inline-block;
                padding: 0.875rem 1.75rem;
                font-weight: 600;
                color: white;
                background-color: #2563eb;
                border-radius: 0.75rem;
                transition: background-color 0.2s;
                cursor: pointer;
            }
            .landing-btn-primary:hover { background-color: #1d4ed8; }
            .landing-btn-primary:disabled { opacity: 0.6; cursor: not-allowed; }
            .landing-btn-small { padding: 0.5rem 1rem; font-size: 0.875rem; }
            .landing-btn-secondary {
                display: inline-block;
                padding: 0.875rem 1.75rem;
                font-weight: 600;
                border: 2px solid currentColor;
                border-radius: 0.75rem;
            }

            .orbit-stage {
                perspective: 1200px;
                transform-style: preserve-3d;
            }
            .orbit-card {
                position: absolute;
                top: 50%;
                left: 50%;
                margin: -90px 0 0 -112px;
                transform-style: preserve-3d;
                will-change: transform;
            }
            .orbit-card-active > div { outline: 2px solid #2563eb; }

            .card-swap-stage {
                perspective: 900px;
                transform-style: preserve-3d;
            }
            .card-swap-card {
                transition: transform 0.8s cubic-bezier(0.22, 1, 0.36, 1);
                will-change: transform;
            }
            "#
        </style>
    }
}
