#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardEntry {
    pub title: &'static str,
    pub description: &'static str,
    /// Logical asset path, resolved with `config::resolve_asset`.
    pub image_ref: &'static str,
    pub background_color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuoteEntry {
    pub text: &'static str,
    pub color: &'static str,
    pub angle_index: usize,
}

pub const CARDS: [CardEntry; 10] = [
    CardEntry {
        title: "Question Board",
        description: "Get a steady stream of journalist questions tailored to your expertise—browse, pick, and share insights that get you featured.",
        image_ref: "/assets/images/landing/image1.png",
        background_color: "#D81285", // magenta
    },
    CardEntry {
        title: "Question Generator",
        description: "Journalists can instantly generate smart, niche-specific questions, while experts get fresh prompts tailored to their field so the right answers always find the right questions.",
        image_ref: "/assets/images/landing/image2.png",
        background_color: "#FF5733", // orange-red
    },
    CardEntry {
        title: "RePitch",
        description: "RePitch gives your past, rejected queries a second shot—automatically matching them with new, relevant questions so nothing valuable goes to waste.",
        image_ref: "/assets/images/landing/image3.png",
        background_color: "#9249F2", // purple
    },
    CardEntry {
        title: "AI Detection",
        description: "Built-in AI detection checks your pitch for originality and human tone. Get a quick score so your voice stays authentic and publish-ready. Requires AI credits.",
        image_ref: "/assets/images/landing/image4.png",
        background_color: "#34A853", // green
    },
    CardEntry {
        title: "PitchCritic",
        description: "Unlock AI-powered clarity and tone tweaks—keeping your voice authentic, confident, and media-ready. Say hello to polished perfection. (Paid add-on)",
        image_ref: "/assets/images/landing/image1.png",
        background_color: "#D9B8FF", // soft violet
    },
    CardEntry {
        title: "PitchRank",
        description: "Stop guessing which pitches matter. PitchRank’s AI-driven scoring highlights your most relevant, high-impact answers so you can spend time where it counts.",
        image_ref: "/assets/images/landing/image2.png",
        background_color: "#C7E0F3", // pale blue
    },
    CardEntry {
        title: "QuestionMatch",
        description: "Your personal AI pitch assistant—from spotting the best questions to drafting winning replies and fine-tuning your language—respond faster, smarter, and stronger.",
        image_ref: "/assets/images/landing/image3.png",
        background_color: "#0D47A1", // dark blue
    },
    CardEntry {
        title: "1:1 Chat",
        description: "Built-in messaging lets experts and journalists connect instantly. Use credits to follow up, clarify briefs, or build lasting media relationships.",
        image_ref: "/assets/images/landing/image4.png",
        background_color: "#1ABC9C", // teal
    },
    CardEntry {
        title: "Show Off Your Profile",
        description: "Create detailed, professional profiles that highlight expertise, focus areas, and past work—helping others quickly see if you’re the right match.",
        image_ref: "/assets/images/landing/image1.png",
        background_color: "#E67E22", // deep orange
    },
    CardEntry {
        title: "Daily Newsletters",
        description: "Stay pitch-ready. Get recent journalist questions delivered to your inbox every day. Pick and reply in minutes.",
        image_ref: "/assets/images/landing/image2.png",
        background_color: "#2C3E50", // dark slate
    },
];

pub const BUBBLE_COLORS: [&str; 13] = [
    "#1abc9c", "#2ecc71", "#3498db", "#9b59b6", "#e67e22", "#e74c3c",
    "#16a085", "#27ae60", "#2980b9", "#8e44ad", "#d35400", "#c0392b", "#34495e",
];

const QUOTE_TEXTS: [&str; 11] = [
    "The biggest shift in marketing today is that customers no longer just buy products — they buy into the story you tell.",
    "AI won’t replace humans, but it will replace humans who don’t know how to use AI.",
    "In cybersecurity, your weakest link is almost always the employee who hasn’t been trained properly.",
    "When you automate a bad process, you just make bad things happen faster.",
    "Personalization is no longer optional — it’s the expectation of every customer.",
    "In investing, time in the market almost always beats timing the market.",
    "Sustainability is no longer a PR strategy — it’s a competitive advantage.",
    "In health, prevention will always be cheaper than treatment.",
    "Data without context is noise; data with context is strategy.",
    "Good leadership today is less about command and control, and more about coaching and enabling.",
    "Most startups don’t fail because of lack of ideas — they fail because they run out of cash or patience.",
];

pub fn quotes() -> Vec<QuoteEntry> {
    QUOTE_TEXTS
        .iter()
        .copied()
        .enumerate()
        .map(|(i, text)| QuoteEntry {
            text,
            color: BUBBLE_COLORS[i % BUBBLE_COLORS.len()],
            angle_index: i,
        })
        .collect()
}

pub const ORBIT_TITLE: &str = "Expert Requests from Verified Publishers";
pub const ORBIT_SUBTITLE: &str = "Stay in the loop with questions from publishers who genuinely want expert input. No spam and no fluff. Just real opportunities to share what you know, get featured, and build your credibility along the way.";
pub const ORBIT_LOGO: &str = "/assets/images/animation/logo.png";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_cards_with_distinct_colors() {
        assert_eq!(CARDS.len(), 10);
        for (i, card) in CARDS.iter().enumerate() {
            assert!(card.image_ref.starts_with("/assets/images/landing/"));
            assert!(CARDS[i + 1..].iter().all(|c| c.background_color != card.background_color));
        }
    }

    #[test]
    fn quotes_take_palette_colors_in_order() {
        let quotes = quotes();
        assert_eq!(quotes.len(), 11);
        assert_eq!(quotes[0].color, "#1abc9c");
        assert_eq!(quotes[10].color, "#d35400");
        for (i, quote) in quotes.iter().enumerate() {
            assert_eq!(quote.color, BUBBLE_COLORS[i % BUBBLE_COLORS.len()]);
            assert_eq!(quote.angle_index, i);
        }
    }
}
