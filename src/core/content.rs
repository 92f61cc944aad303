//! Static landing page content: feature items, pricing plans, FAQ

use serde::{Deserialize, Serialize};

// ============================================================================
// Features
// ============================================================================

/// Accent color of a feature card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureColor {
    Blue,
    Emerald,
    Amber,
    Rose,
    Violet,
    Cyan,
}

impl FeatureColor {
    /// Hex value used for glows and icon backgrounds
    pub fn hex(&self) -> &'static str {
        match self {
            FeatureColor::Blue => "#3b82f6",
            FeatureColor::Emerald => "#10b981",
            FeatureColor::Amber => "#f59e0b",
            FeatureColor::Rose => "#f43f5e",
            FeatureColor::Violet => "#8b5cf6",
            FeatureColor::Cyan => "#06b6d4",
        }
    }
}

/// Small illustrative preview rendered inside a feature card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureWidget {
    BookingCalendar,
    InvoiceSummary,
    ReminderFeed,
    RevenueChart,
    TeamRoster,
    PaymentBadge,
}

/// A feature shown on the orbiting carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub short: &'static str,
    pub detail: &'static str,
    /// Icon file name under `/icons`
    pub icon: &'static str,
    pub color: FeatureColor,
    pub widget: FeatureWidget,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Online Booking",
        short: "Let customers book 24/7",
        detail: "Share a booking link or embed it on your site. Customers pick a free slot, and it lands straight on your calendar.",
        icon: "calendar",
        color: FeatureColor::Blue,
        widget: FeatureWidget::BookingCalendar,
    },
    Feature {
        title: "Smart Invoicing",
        short: "Get paid in days, not weeks",
        detail: "Turn finished appointments into invoices with one click. Overdue invoices are chased automatically.",
        icon: "receipt",
        color: FeatureColor::Emerald,
        widget: FeatureWidget::InvoiceSummary,
    },
    Feature {
        title: "Automatic Reminders",
        short: "Fewer no-shows",
        detail: "Email and SMS reminders go out before every appointment, so your calendar stays full.",
        icon: "bell",
        color: FeatureColor::Amber,
        widget: FeatureWidget::ReminderFeed,
    },
    Feature {
        title: "Revenue Insights",
        short: "Know what pays the bills",
        detail: "See bookings, revenue and repeat customers at a glance, broken down by service and staff member.",
        icon: "chart",
        color: FeatureColor::Rose,
        widget: FeatureWidget::RevenueChart,
    },
    Feature {
        title: "Team Scheduling",
        short: "Everyone in the right place",
        detail: "Manage shifts, working hours and time off for the whole team from one shared view.",
        icon: "users",
        color: FeatureColor::Violet,
        widget: FeatureWidget::TeamRoster,
    },
    Feature {
        title: "Card Payments",
        short: "Take deposits up front",
        detail: "Collect deposits at booking time and settle the rest in person or online.",
        icon: "credit-card",
        color: FeatureColor::Cyan,
        widget: FeatureWidget::PaymentBadge,
    },
];

// ============================================================================
// Pricing
// ============================================================================

/// Discount applied to annual billing, in percent
pub const ANNUAL_DISCOUNT_PERCENT: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Annual,
}

impl BillingCycle {
    pub fn toggled(self) -> Self {
        match self {
            BillingCycle::Monthly => BillingCycle::Annual,
            BillingCycle::Annual => BillingCycle::Monthly,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "Monthly",
            BillingCycle::Annual => "Annual",
        }
    }

    /// Text shown under the price
    pub fn period_note(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "/month",
            BillingCycle::Annual => "/month, billed yearly",
        }
    }
}

/// A pricing tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingPlan {
    pub id: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    /// Monthly price in whole dollars
    pub monthly_price: u32,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

impl PricingPlan {
    /// Per-month price in cents for the given billing cycle
    pub fn price_cents(&self, cycle: BillingCycle) -> u32 {
        let monthly_cents = self.monthly_price * 100;
        match cycle {
            BillingCycle::Monthly => monthly_cents,
            BillingCycle::Annual => {
                // Round half up to the nearest cent
                (monthly_cents * (100 - ANNUAL_DISCOUNT_PERCENT) + 50) / 100
            }
        }
    }

    /// Display price, e.g. `$29` or `$23.20`
    pub fn display_price(&self, cycle: BillingCycle) -> String {
        format_cents(self.price_cents(cycle))
    }

    /// Yearly saving in cents when billed annually
    pub fn annual_savings_cents(&self) -> u32 {
        (self.price_cents(BillingCycle::Monthly) - self.price_cents(BillingCycle::Annual)) * 12
    }
}

/// Format cents as dollars, dropping `.00`
pub fn format_cents(cents: u32) -> String {
    let dollars = cents / 100;
    let rest = cents % 100;
    if rest == 0 {
        format!("${}", dollars)
    } else {
        format!("${}.{:02}", dollars, rest)
    }
}

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        id: "starter",
        name: "Starter",
        tagline: "For solo owners getting organised",
        monthly_price: 12,
        features: &[
            "1 staff calendar",
            "Online booking page",
            "Email reminders",
            "Up to 50 invoices / month",
        ],
        highlighted: false,
    },
    PricingPlan {
        id: "growth",
        name: "Growth",
        tagline: "For busy shops with a small team",
        monthly_price: 29,
        features: &[
            "Up to 5 staff calendars",
            "Email and SMS reminders",
            "Unlimited invoices",
            "Card payments and deposits",
            "Revenue insights",
        ],
        highlighted: true,
    },
    PricingPlan {
        id: "scale",
        name: "Scale",
        tagline: "For multi-location businesses",
        monthly_price: 79,
        features: &[
            "Unlimited staff calendars",
            "Multiple locations",
            "Team scheduling and time off",
            "Priority support",
            "Custom domain for booking page",
        ],
        highlighted: false,
    },
];

// ============================================================================
// FAQ
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "Is there a free trial?",
        answer: "Yes. Every plan starts with a 14-day free trial, no credit card required.",
    },
    FaqEntry {
        question: "Can I switch plans later?",
        answer: "Any time. Upgrades apply immediately and downgrades take effect at the end of your billing period.",
    },
    FaqEntry {
        question: "Do my customers need an account to book?",
        answer: "No. Customers book with just their name and email or phone number.",
    },
    FaqEntry {
        question: "Which payment providers do you support?",
        answer: "Card payments run through major payment processors. Payouts reach your bank account within two business days.",
    },
    FaqEntry {
        question: "Can I import my existing clients?",
        answer: "Yes. Upload a CSV export from your current tool and we match the columns for you.",
    },
    FaqEntry {
        question: "Does it work on my phone?",
        answer: "The whole app works in any modern mobile browser, so you can check your day between appointments.",
    },
    FaqEntry {
        question: "Is my data safe?",
        answer: "Data is encrypted in transit and at rest, and backed up daily. You can export everything at any time.",
    },
    FaqEntry {
        question: "How do I get help?",
        answer: "Chat with us from inside the app, or book a demo and we will walk you through the setup.",
    },
];

/// Accordion that keeps at most one entry open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FaqAccordion {
    open: Option<usize>,
}

impl FaqAccordion {
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Open `index`, or close it if it is already open
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) {
            None
        } else {
            Some(index)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_list_shape() {
        assert_eq!(FEATURES.len(), 6);
        assert!(FEATURES.iter().all(|f| !f.title.is_empty() && !f.detail.is_empty()));
    }

    #[test]
    fn test_feature_colors_are_hex() {
        for feature in FEATURES {
            let hex = feature.color.hex();
            assert!(hex.starts_with('#'));
            assert_eq!(hex.len(), 7);
        }
    }

    #[test]
    fn test_monthly_price() {
        let growth = &PRICING_PLANS[1];
        assert_eq!(growth.price_cents(BillingCycle::Monthly), 2900);
        assert_eq!(growth.display_price(BillingCycle::Monthly), "$29");
    }

    #[test]
    fn test_annual_price_is_discounted() {
        let growth = &PRICING_PLANS[1];
        assert_eq!(growth.price_cents(BillingCycle::Annual), 2320);
        assert_eq!(growth.display_price(BillingCycle::Annual), "$23.20");
        assert_eq!(growth.annual_savings_cents(), 580 * 12);
    }

    #[test]
    fn test_single_highlighted_plan() {
        assert_eq!(PRICING_PLANS.iter().filter(|p| p.highlighted).count(), 1);
    }

    #[test]
    fn test_billing_cycle_toggle() {
        let cycle = BillingCycle::default();
        assert_eq!(cycle, BillingCycle::Monthly);
        assert_eq!(cycle.toggled(), BillingCycle::Annual);
        assert_eq!(cycle.toggled().toggled(), BillingCycle::Monthly);
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(0), "$0");
        assert_eq!(format_cents(905), "$9.05");
        assert_eq!(format_cents(6320), "$63.20");
    }

    #[test]
    fn test_accordion_keeps_one_open() {
        let mut accordion = FaqAccordion::default();
        assert_eq!(accordion.open_index(), None);

        accordion.toggle(2);
        assert!(accordion.is_open(2));

        accordion.toggle(5);
        assert!(accordion.is_open(5));
        assert!(!accordion.is_open(2));

        accordion.toggle(5);
        assert_eq!(accordion.open_index(), None);
    }
}
