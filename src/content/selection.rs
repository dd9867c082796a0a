//! The user's emotion pick for one answer.

use super::types::EmotionTag;

/// One or two distinct emotion tags, in the order they were picked.
///
/// The type cannot hold zero tags, more than two, or a repeated tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionSelection {
    first: EmotionTag,
    second: Option<EmotionTag>,
}

impl EmotionSelection {
    pub fn single(tag: EmotionTag) -> Self {
        Self {
            first: tag,
            second: None,
        }
    }

    /// Returns `None` when both tags are the same.
    pub fn pair(first: EmotionTag, second: EmotionTag) -> Option<Self> {
        if first == second {
            return None;
        }
        Some(Self {
            first,
            second: Some(second),
        })
    }

    /// Builds a selection from a slice of 1–2 distinct tags.
    pub fn from_tags(tags: &[EmotionTag]) -> Option<Self> {
        match tags {
            [one] => Some(Self::single(*one)),
            [first, second] => Self::pair(*first, *second),
            _ => None,
        }
    }

    /// Applies one chip press to an optional selection.
    ///
    /// A selected tag is removed. An unselected tag is appended, dropping
    /// the oldest pick when two are already held.
    pub fn toggle(current: Option<Self>, tag: EmotionTag) -> Option<Self> {
        let Some(current) = current else {
            return Some(Self::single(tag));
        };
        match current.second {
            None if current.first == tag => None,
            None => Self::pair(current.first, tag),
            Some(second) if current.first == tag => Some(Self::single(second)),
            Some(second) if second == tag => Some(Self::single(current.first)),
            Some(second) => Self::pair(second, tag),
        }
    }

    pub fn len(&self) -> usize {
        if self.second.is_some() {
            2
        } else {
            1
        }
    }

    pub fn contains(&self, tag: EmotionTag) -> bool {
        self.first == tag || self.second == Some(tag)
    }

    pub fn tags(&self) -> Vec<EmotionTag> {
        std::iter::once(self.first).chain(self.second).collect()
    }

    /// True when at least one picked tag is among `truth`.
    pub fn matches_any(&self, truth: &[EmotionTag]) -> bool {
        truth.iter().any(|tag| self.contains(*tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_from_empty_selects() {
        let sel = EmotionSelection::toggle(None, EmotionTag::Fear);
        assert_eq!(sel, Some(EmotionSelection::single(EmotionTag::Fear)));
    }

    #[test]
    fn toggle_selected_tag_removes_it() {
        let sel = Some(EmotionSelection::single(EmotionTag::Fear));
        assert_eq!(EmotionSelection::toggle(sel, EmotionTag::Fear), None);

        let pair = EmotionSelection::pair(EmotionTag::Fear, EmotionTag::Greed);
        let sel = EmotionSelection::toggle(pair, EmotionTag::Fear).unwrap();
        assert_eq!(sel.tags(), vec![EmotionTag::Greed]);
    }

    #[test]
    fn third_pick_drops_oldest() {
        let sel = EmotionSelection::pair(EmotionTag::Fear, EmotionTag::Greed);
        let sel = EmotionSelection::toggle(sel, EmotionTag::Authority).unwrap();
        assert_eq!(sel.tags(), vec![EmotionTag::Greed, EmotionTag::Authority]);
    }

    #[test]
    fn from_tags_rejects_bad_sizes_and_duplicates() {
        assert!(EmotionSelection::from_tags(&[]).is_none());
        assert!(EmotionSelection::from_tags(&[EmotionTag::Fear, EmotionTag::Fear]).is_none());
        assert!(EmotionSelection::from_tags(&[
            EmotionTag::Fear,
            EmotionTag::Greed,
            EmotionTag::Safe
        ])
        .is_none());
        assert_eq!(
            EmotionSelection::from_tags(&[EmotionTag::Safe]).map(|s| s.len()),
            Some(1)
        );
    }

    #[test]
    fn matches_any_is_intersection_check() {
        let sel = EmotionSelection::pair(EmotionTag::Urgency, EmotionTag::Greed).unwrap();
        assert!(sel.matches_any(&[EmotionTag::Fear, EmotionTag::Urgency]));
        assert!(!sel.matches_any(&[EmotionTag::Safe]));
    }
}
