use super::types::{Annotation, Step};
use std::collections::HashMap;

/// Anchor text -> annotation, remembering first-insertion order.
///
/// Rebinding an existing anchor replaces its annotation but keeps its
/// original position, so lookups stay deterministic across steps.
#[derive(Debug, Clone, Default)]
pub struct AnchorMap {
    entries: Vec<Annotation>,
    index: HashMap<String, usize>,
}

impl AnchorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_steps(steps: &[Step]) -> Self {
        let mut map = Self::new();
        for step in steps {
            for annotation in &step.add {
                map.bind(annotation.clone());
            }
        }
        map
    }

    pub fn bind(&mut self, annotation: Annotation) {
        if annotation.anchor.is_empty() {
            tracing::debug!(title = %annotation.title, "skipping annotation with empty anchor");
            return;
        }
        match self.index.get(&annotation.anchor) {
            Some(&slot) => self.entries[slot] = annotation,
            None => {
                self.index
                    .insert(annotation.anchor.clone(), self.entries.len());
                self.entries.push(annotation);
            }
        }
    }

    /// Apply the "current step" override; always bound last.
    pub fn focus(&mut self, anchor: &str, annotation: &Annotation) {
        self.bind(Annotation {
            anchor: anchor.to_string(),
            ..annotation.clone()
        });
    }

    pub fn get(&self, anchor: &str) -> Option<&Annotation> {
        self.index.get(anchor).map(|&slot| &self.entries[slot])
    }

    /// First anchor, in insertion order, that occurs in `line`.
    pub fn find_in(&self, line: &str) -> Option<&Annotation> {
        self.entries.iter().find(|a| line.contains(a.anchor.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann(anchor: &str, title: &str) -> Annotation {
        Annotation {
            anchor: anchor.to_string(),
            title: title.to_string(),
            content: format!("{} body", title),
        }
    }

    fn step(items: Vec<Annotation>) -> Step {
        Step { add: items }
    }

    #[test]
    fn test_later_step_overwrites_same_anchor() {
        let steps = vec![
            step(vec![ann("foo", "first"), ann("bar", "bar")]),
            step(vec![ann("foo", "second")]),
        ];
        let map = AnchorMap::from_steps(&steps);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("foo").map(|a| a.title.as_str()), Some("second"));
        // Overwrite keeps the original slot.
        let order: Vec<&str> = map.iter().map(|a| a.anchor.as_str()).collect();
        assert_eq!(order, vec!["foo", "bar"]);
    }

    #[test]
    fn test_first_inserted_anchor_wins_on_line() {
        let steps = vec![step(vec![ann("load_data", "outer"), ann("data", "inner")])];
        let map = AnchorMap::from_steps(&steps);
        let hit = map.find_in("    rows = load_data(path)").expect("anchor on line");
        assert_eq!(hit.title, "outer");

        let steps = vec![step(vec![ann("data", "inner"), ann("load_data", "outer")])];
        let map = AnchorMap::from_steps(&steps);
        let hit = map.find_in("    rows = load_data(path)").expect("anchor on line");
        assert_eq!(hit.title, "inner");
    }

    #[test]
    fn test_focus_overrides_last() {
        let mut map = AnchorMap::from_steps(&[step(vec![ann("run", "old")])]);
        map.focus("run", &ann("ignored", "live"));
        let hit = map.get("run").expect("bound");
        assert_eq!(hit.title, "live");
        assert_eq!(hit.anchor, "run");
    }

    #[test]
    fn test_empty_anchor_is_ignored() {
        let map = AnchorMap::from_steps(&[step(vec![ann("", "nothing")])]);
        assert!(map.is_empty());
        assert!(map.find_in("any line").is_none());
    }
}
