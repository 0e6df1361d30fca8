//! Static marketing copy for the kiosk sections

/// One service tab
pub struct Service {
    pub title: &'static str,
    pub blurb: &'static str,
    pub highlights: &'static [&'static str],
}

/// One testimonial slide
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub detail: &'static str,
}

/// One FAQ entry
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Group Classes",
        blurb: "High-energy classes for every level, led by certified coaches.",
        highlights: &[
            "HIIT Circuit - Mon/Wed/Fri 6am & 6pm",
            "Spin Studio - daily, 45 minutes",
            "Yoga & Mobility - Tue/Thu 7pm",
        ],
    },
    Service {
        title: "Personal Training",
        blurb: "One-on-one coaching built around your goals and schedule.",
        highlights: &[
            "Free goal-setting consultation",
            "Custom programming, reviewed weekly",
            "Nutrition guidance included",
        ],
    },
    Service {
        title: "Wellness",
        blurb: "Recovery and wellness services to keep you training.",
        highlights: &[
            "Sauna & cold plunge",
            "Sports massage by appointment",
            "Monthly wellness workshops",
        ],
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "I've tried a lot of gyms. FitLife is the first one that felt like a team.",
        author: "Maria G.",
        detail: "Member for 2 years",
    },
    Testimonial {
        quote: "Down 30 pounds and stronger than I've ever been. The coaches actually care.",
        author: "Devon P.",
        detail: "Personal training client",
    },
    Testimonial {
        quote: "The 6am spin class is the best part of my day. Every day.",
        author: "Sam K.",
        detail: "Member for 8 months",
    },
];

pub const FAQ: &[FaqItem] = &[
    FaqItem {
        question: "Do I need experience to join a class?",
        answer: "No. Every class offers scaled options, and coaches adjust \
                 movements to your level on the spot.",
    },
    FaqItem {
        question: "Is there a joining fee?",
        answer: "No joining fee, no lock-in contract. Memberships are \
                 month-to-month and you can pause anytime.",
    },
    FaqItem {
        question: "What are your opening hours?",
        answer: "Staffed hours are 5:30am-9pm weekdays and 7am-5pm \
                 weekends. Members with a fob have 24/7 access.",
    },
    FaqItem {
        question: "Can I bring a friend?",
        answer: "Yes - every membership includes two guest passes per \
                 month. Ask at the front desk.",
    },
];

pub const HOME_HEADLINE: &str = "Train Hard. Live Well.";

pub const HOME_LINES: &[&str] = &[
    "FitLife is a community gym with coach-led classes, personal",
    "training, and wellness services under one roof.",
    "",
    "First visit? Your trial week is free - no card required.",
    "Drop in, meet the coaches, and find the program that fits.",
    "",
    "Use the menu to browse services, hear from members, check the",
    "FAQ, or send us a message from the Contact section.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_are_populated() {
        assert!(!SERVICES.is_empty());
        assert!(!TESTIMONIALS.is_empty());
        assert!(!FAQ.is_empty());
    }
}
