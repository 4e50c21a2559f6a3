use label_fit::layout::{reflow, word_wrap};
use label_fit::Px;
use proptest::prelude::*;

fn mono(_: char) -> Px {
    Px(10.0)
}

fn proportional(ch: char) -> Px {
    match ch {
        'i' | 'l' | 'j' => Px(4.0),
        'm' | 'w' => Px(15.0),
        c if c.is_whitespace() => Px(5.0),
        _ => Px(8.0),
    }
}

fn width(line: &str, width_of: fn(char) -> Px) -> Px {
    line.chars().map(width_of).sum()
}

fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

proptest! {
    #[test]
    fn lines_fit_unless_they_hold_one_word(text in "[a-z ]{0,80}", budget in 10u32..200) {
        let budget = Px(budget as f32);
        for line in word_wrap(&text, budget, proportional) {
            prop_assert!(
                width(&line, proportional) <= budget || words(&line).len() == 1,
                "{line:?} overflows {budget}"
            );
        }
    }

    #[test]
    fn words_survive_wrapping(text in "[a-z \n]{0,80}", budget in 10u32..200) {
        let lines: Vec<String> = word_wrap(&text, Px(budget as f32), mono).collect();
        prop_assert!(!lines.is_empty());
        let joined = lines.join(" ");
        prop_assert_eq!(words(&joined), words(&text));
        for line in &lines {
            prop_assert_eq!(line.trim(), line.as_str());
        }
    }

    #[test]
    fn wrapped_text_wraps_to_itself(text in "[a-z]{1,12}( {1,3}[a-z]{1,12}){0,20}", budget in 10u32..200) {
        let budget = Px(budget as f32);
        let once: Vec<String> = word_wrap(&text, budget, proportional).collect();
        let twice: Vec<String> = word_wrap(&once.join("\n"), budget, proportional).collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn broken_words_fit(text in "[a-z]{1,30}( [a-z]{1,30}){0,5}", budget in 15u32..100) {
        let budget = Px(budget as f32);
        let lines: Vec<String> = word_wrap(&text, budget, proportional)
            .break_long_words(true)
            .collect();
        for line in &lines {
            prop_assert!(width(line, proportional) <= budget, "{line:?} overflows {budget}");
        }
        prop_assert_eq!(lines.concat().replace(' ', ""), text.replace(' ', ""));
    }
}

#[test]
fn long_passages_reflow_within_the_budget() {
    let text = lipsum::lipsum(200);
    let budget = Px(300.0);
    let wrapped = reflow(&text, budget, mono);

    assert!(wrapped.lines().count() > 1);
    for line in wrapped.lines() {
        assert!(width(line, mono) <= budget, "{line:?} overflows");
    }
    assert_eq!(words(&wrapped), words(&text));
}
