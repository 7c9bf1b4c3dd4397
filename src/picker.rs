//! Fuzzy filter for the theme picker.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::state::PickerState;
use crate::themes::Theme;

/// Recompute the filtered list from the query (fuzzy match on name, then
/// description). Empty query shows every theme in registry order.
pub fn update_picker_filter(picker: &mut PickerState) {
    let query = picker.query.trim().to_lowercase();
    if query.is_empty() {
        picker.filtered = (0..Theme::all().len()).collect();
    } else {
        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, usize)> = Theme::all()
            .iter()
            .enumerate()
            .filter_map(|(i, t)| {
                let name_score = matcher.fuzzy_match(t.name, &query);
                let desc_score = matcher.fuzzy_match(&t.description.to_lowercase(), &query);
                name_score.or(desc_score).map(|s| (s, i))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        picker.filtered = scored.into_iter().map(|(_, i)| i).collect();
    }
    picker.selected_index = 0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_lists_all_themes() {
        let mut picker = PickerState::default();
        update_picker_filter(&mut picker);
        assert_eq!(picker.filtered.len(), Theme::all().len());
    }

    #[test]
    fn query_narrows_to_matching_theme() {
        let mut picker = PickerState { query: "retro".into(), ..Default::default() };
        update_picker_filter(&mut picker);
        assert_eq!(picker.selected_theme().map(|t| t.name), Some("retro"));
    }

    #[test]
    fn no_match_leaves_nothing_selected() {
        let mut picker = PickerState { query: "zzzzzz".into(), ..Default::default() };
        update_picker_filter(&mut picker);
        assert!(picker.filtered.is_empty());
        assert!(picker.selected_theme().is_none());
    }
}
