//! Feedback narrator — the judge's verdict for a final score.

use serde::{Deserialize, Serialize};

/// At most this many feedback lines are quoted in the verdict.
pub const MAX_QUOTED_LINES: usize = 4;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Verdict {
    pub title:   String,
    pub message: String,
}

struct Band {
    title:   &'static str,
    message: &'static str,
    intro:   &'static str,
}

fn band(score: u8) -> Band {
    match score {
        100.. => Band {
            title:   "DIVINE PERFECTION!",
            message: "I have no words. You have gone beyond cooking and made ART. Every grain, every flavour, is a symphony. THIS is paella! BRAVO!",
            intro:   "Nuances from a genius (if there are any):",
        },
        95..=99 => Band {
            title:   "A MASTERPIECE IN THE MAKING!",
            message: "You brushed perfection with your fingertips. A paella that moves you, that speaks, that almost floats. One breath away from eternal glory. Impressive!",
            intro:   "Details for top honours:",
        },
        90..=94 => Band {
            title:   "EXCEPTIONAL TALENT!",
            message: "There is the makings of a champion here. Polished technique, instinct and brilliant execution. This paella has soul and deep respect for the produce. Keep going!",
            intro:   "Notes to polish the diamond:",
        },
        85..=89 => Band {
            title:   "OUTSTANDING, WITH HONOURS!",
            message: "A very remarkable paella, the kind people remember. Good control, good flavour, good presentation. You show craft and passion. Very well done!",
            intro:   "Pointers on the road to excellence:",
        },
        80..=84 => Band {
            title:   "VERY PROMISING, BUT...!",
            message: "You have the base and the idea, but you lack the something that turns good into extraordinary. There are flashes of brilliance, and shadows too. Do not settle!",
            intro:   "Areas to improve for a future champion:",
        },
        70..=79 => Band {
            title:   "A PASS, WITH OBVIOUS BUTS",
            message: "Your paella is... correct. It makes the cut, without any flair. The intention is there but the execution runs at half throttle. You need more rigour and ambition.",
            intro:   "Points to review urgently:",
        },
        60..=69 => Band {
            title:   "MEDIOCRE. NO SOUL, NO RISK",
            message: "This left me completely cold. The paella says nothing. A bare-minimum exercise, bland and without character. Wake up or find another calling!",
            intro:   "Flaws that cannot be ignored:",
        },
        50..=59 => Band {
            title:   "WORRYINGLY DEFICIENT",
            message: "Now we have a serious problem. The mistakes are too obvious and badly damage the result. This is a long way from an acceptable paella.",
            intro:   "Glaring errors that sink the dish:",
        },
        40..=49 => Band {
            title:   "AN UTTER FIASCO",
            message: "Honestly, I do not know where to begin. This is a pile of blunders. You have mistreated the produce and the technique. Back to basics, NOW!",
            intro:   "Culinary disasters detected:",
        },
        30..=39 => Band {
            title:   "A CULINARY OFFENCE!",
            message: "This is not a paella, it is an insult to tradition and good taste. Every bite is a penance. Frankly, unpresentable.",
            intro:   "Atrocities committed in this paella:",
        },
        20..=29 => Band {
            title:   "SECONDHAND EMBARRASSMENT!",
            message: "I doubt even the hungriest soul would eat this. A string of catastrophic errors. You should seriously rethink your future in the kitchen.",
            intro:   "A list of horrors (not exhaustive):",
        },
        _ => Band {
            title:   "IS THIS A JOKE?",
            message: "No, seriously, you expected me to judge THIS? It is a gastronomic attack. You achieved the impossible: an anti-paella. Retire.",
            intro:   "Chronicle of a failure foretold:",
        },
    }
}

/// Title and narrative for `score`, quoting the first few feedback lines
/// when there are any.
pub fn narrate(score: u8, feedback: &[String]) -> Verdict {
    let band = band(score);
    let mut message = band.message.to_string();

    if !feedback.is_empty() {
        let quoted: Vec<&str> = feedback
            .iter()
            .take(MAX_QUOTED_LINES)
            .map(String::as_str)
            .collect();
        message.push_str("\n\n");
        message.push_str(band.intro);
        message.push_str("\n- ");
        message.push_str(&quoted.join("\n- "));
    }

    Verdict { title: band.title.to_string(), message }
}
