use lazy_static::lazy_static;

/// A canned answer reachable by substring search over the visitor's text.
pub struct ResponseRule {
    pub keyword: &'static str,
    pub response: &'static str,
}

impl ResponseRule {
    const fn new(keyword: &'static str, response: &'static str) -> ResponseRule {
        ResponseRule { keyword, response }
    }
}

lazy_static! {
    // Matching walks this table top to bottom and the first hit wins, so
    // order is part of the configuration: "dining" sits above "food court"
    // and shadows it whenever a question mentions both.
    static ref RESPONSE_RULES: Vec<ResponseRule> = vec![
        ResponseRule::new(
            "library hours",
            "The library is open Mon-Thu 7am-2am, Fri 7am-10pm, Sat 9am-10pm, Sun 10am-2am. During finals week, we're open 24/7!",
        ),
        ResponseRule::new(
            "dining",
            "We have several dining options: Main Cafeteria (7am-9pm), Food Court (11am-8pm), and various campus cafés. The main cafeteria offers all-you-can-eat meal plans!",
        ),
        ResponseRule::new(
            "registration",
            "Class registration opens April 1st for Fall semester and November 1st for Spring. You can register online through the student portal or visit the Registrar's office (Mon-Fri 8am-5pm).",
        ),
        ResponseRule::new(
            "events",
            "This week we have a Career Fair on Monday (10am-4pm), AI Healthcare lecture Wednesday (7pm), and outdoor Movie Night Friday (8pm). Check the events tab for more details!",
        ),
        ResponseRule::new(
            "gym",
            "The Recreation Center is open Mon-Fri 6am-11pm, weekends 8am-10pm. It features a pool, gym, courts, and climbing wall. Just bring your student ID!",
        ),
        ResponseRule::new(
            "financial aid",
            "Financial Aid office has walk-in hours Mon-Fri 9am-4pm. They offer FAFSA assistance, scholarship info, and payment plans. Many services are also available online 24/7.",
        ),
        ResponseRule::new(
            "study space",
            "The library has silent study floors (3rd & 4th), bookable group study rooms, and a 24-hour study lounge on the ground floor. Graduate carrels are also available!",
        ),
        ResponseRule::new(
            "food court",
            "Our food court includes Pizza Station, Asian Express, Grill & Go, and a Salad Bar. Open 11am-8pm daily, accepts dining dollars and cash.",
        ),
        ResponseRule::new(
            "counseling",
            "Counseling Center is open Mon-Fri 8am-6pm. Health Services available Mon-Fri 8am-5pm. Both offer walk-ins and appointments for student support.",
        ),
        ResponseRule::new(
            "parking",
            "Parking permits are required Mon-Fri 7am-5pm. Student lots are marked in blue. Evening and weekend parking is free in most lots. Permits available online or at Campus Safety.",
        ),
    ];
}

// Fallback cues, checked in this order once the rule table comes up empty.
static HOURS_CUES: [&str; 3] = ["hours", "when", "time"];
static PLACE_CUES: [&str; 2] = ["where", "location"];
static HELP_CUES: [&str; 2] = ["how", "help"];

static HOURS_FALLBACK: &str = "I can help you with operating hours! Most campus facilities have different schedules. Could you specify which service you're asking about? (Library, dining, recreation center, etc.)";

static PLACE_FALLBACK: &str = "I can help you find campus locations! Most services are centrally located. Could you tell me what specific location you're looking for?";

static HELP_FALLBACK: &str = "I'm here to help! I can assist with information about academic schedules, campus facilities, dining services, library resources, events, and administrative procedures. What specific area would you like to know about?";

static GENERIC_FALLBACK: &str = "Thanks for your question! I have information about campus schedules, facilities, dining, library services, events, and administrative procedures. Could you be more specific about what you'd like to know? You can also check the information modules on the left for detailed information.";

/// Resolves free text to a canned answer. Total: every input, including
/// the empty string, maps to some non-empty response.
pub fn respond(input: &str) -> &'static str {
    let query = input.to_lowercase();

    for rule in RESPONSE_RULES.iter() {
        if query.contains(rule.keyword) {
            return rule.response;
        }
    }

    if HOURS_CUES.iter().any(|cue| query.contains(cue)) {
        return HOURS_FALLBACK;
    }
    if PLACE_CUES.iter().any(|cue| query.contains(cue)) {
        return PLACE_FALLBACK;
    }
    if HELP_CUES.iter().any(|cue| query.contains(cue)) {
        return HELP_FALLBACK;
    }

    GENERIC_FALLBACK
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rule(keyword: &str) -> &'static ResponseRule {
        RESPONSE_RULES
            .iter()
            .find(|rule| rule.keyword == keyword)
            .expect("configured keyword")
    }

    #[test]
    fn every_keyword_reaches_its_own_response() {
        for rule in RESPONSE_RULES.iter() {
            assert_eq!(respond(rule.keyword), rule.response);
        }
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(respond("LIBRARY HOURS???"), rule("library hours").response);
        assert_eq!(respond("Is PARKING free?"), rule("parking").response);
    }

    #[test]
    fn library_hours_question_gets_the_library_answer() {
        assert_eq!(
            respond("What are the library hours?"),
            "The library is open Mon-Thu 7am-2am, Fri 7am-10pm, Sat 9am-10pm, Sun 10am-2am. During finals week, we're open 24/7!",
        );
    }

    #[test]
    fn where_to_eat_lands_on_the_location_fallback() {
        // "dining" never appears literally, so no rule fires and the
        // "where" cue decides.
        assert_eq!(
            respond("Where can I eat on campus?"),
            "I can help you find campus locations! Most services are centrally located. Could you tell me what specific location you're looking for?",
        );
    }

    #[test]
    fn earlier_rule_shadows_later_one() {
        assert_eq!(
            respond("Is dining at the food court any good?"),
            rule("dining").response,
        );
        // Without "dining" in the text the later rule stays reachable.
        assert_eq!(
            respond("Is the food court open today?"),
            rule("food court").response,
        );
    }

    #[test]
    fn fallbacks_fire_in_cue_order() {
        assert_eq!(respond("when does it open"), HOURS_FALLBACK);
        assert_eq!(respond("where is it"), PLACE_FALLBACK);
        assert_eq!(respond("how do I register for classes?"), HELP_FALLBACK);
        assert_eq!(respond("hello"), GENERIC_FALLBACK);
        // An hours cue outranks a location cue in the same sentence.
        assert_eq!(respond("where and when"), HOURS_FALLBACK);
    }

    #[test]
    fn responder_is_total_and_never_empty() {
        for input in ["", "   ", "zzz", "¿qué?", "café"] {
            assert!(!respond(input).is_empty());
        }
    }
}
