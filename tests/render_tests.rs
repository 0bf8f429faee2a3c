// tests/render_tests.rs
// Scene rendering from presentation data files

use code_deck::page::{render_document, render_error_page};
use code_deck::scene::{render_lines, Annotation, CodeScene, Presentation, Step, Unit};
use code_deck::{render_code_scene, Deck, DeckError, RenderOptions, Scene};
use std::fs;

// Helper to create a presentation data file
fn create_data_file(name: &str, content: &str) -> String {
    let path = format!("test_{}.json", name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

// Helper to cleanup data files
fn cleanup(path: &str) {
    let _ = fs::remove_file(path);
}

fn annotation(anchor: &str, title: &str) -> Annotation {
    Annotation {
        anchor: anchor.to_string(),
        title: title.to_string(),
        content: format!("{} details", title),
    }
}

fn code_scene(code: &str, steps: Vec<Step>) -> CodeScene {
    CodeScene::from_unit(&Unit {
        id: "unit".to_string(),
        title: "main.py".to_string(),
        code: code.to_string(),
        steps,
    })
}

#[cfg(test)]
mod render_tests {
    use super::*;

    #[test]
    fn test_load_and_render_deck() {
        let content = r#"{
  "intro": [
    {"type": "cover", "title": "Walkthrough", "subtitle": "Team 1", "big_text": "Parser"}
  ],
  "units": [
    {
      "id": "main",
      "title": "main.py",
      "code": "def main():\r\n    \"\"\"Entry point.\r\n    Runs things.\"\"\"\r\n    run()\r\n",
      "steps": [
        {"add": [{"anchor": "def main", "title": "Entry", "content": "Starts here"}]},
        {"add": [{"anchor": "run()", "title": "Run", "content": "Does work"}]}
      ]
    }
  ]
}"#;

        let path = create_data_file("load_render", content);
        let data = Presentation::load(&path).expect("Could not load data");
        cleanup(&path);

        let deck = Deck::from_presentation(&data);
        assert_eq!(deck.len(), 2);

        let Some(Scene::Code(scene)) = deck.get(1) else {
            panic!("second scene should be code");
        };
        let lines = render_lines(scene);

        // Trailing newline leaves one extra blank line
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].annotation.as_ref().map(|a| a.title.as_str()), Some("Entry"));
        assert!(lines[1].annotation.is_none());
        assert!(lines[2].markup.starts_with(r#"<span class="vs-string">"#));
        assert!(lines[2].markup.contains(r#"Runs things."""</span>"#));
        assert!(lines[3].markup.contains(r#"<span class="vs-func">run</span>"#));
        assert_eq!(lines[3].annotation.as_ref().map(|a| a.title.as_str()), Some("Run"));
        assert_eq!(lines[4].text, " ");
    }

    #[test]
    fn test_missing_file_reports_io_error() {
        let err = Presentation::load("test_does_not_exist.json").unwrap_err();
        assert!(matches!(err, DeckError::Io { .. }));
        assert!(err.to_string().contains("test_does_not_exist.json"));
    }

    #[test]
    fn test_malformed_json_renders_visible_error() {
        let path = create_data_file("malformed", "{ \"units\": [ ");
        let err = Presentation::load(&path).unwrap_err();
        cleanup(&path);

        assert!(matches!(err, DeckError::Json(_)));
        let page = render_error_page(&err);
        assert!(page.contains("class=\"load-error\">Error: invalid presentation data"));
    }

    #[test]
    fn test_identical_anchor_last_step_wins() {
        let steps = vec![
            Step { add: vec![annotation("compute(", "first")] },
            Step { add: vec![annotation("compute(", "second")] },
        ];
        let lines = render_lines(&code_scene("total = compute(x)", steps));
        assert_eq!(lines[0].annotation.as_ref().map(|a| a.title.as_str()), Some("second"));
    }

    #[test]
    fn test_overlapping_anchors_first_inserted_wins() {
        let steps = vec![
            Step { add: vec![annotation("total", "variable")] },
            Step { add: vec![annotation("compute(x)", "call")] },
        ];
        let scene = code_scene("total = compute(x)", steps);
        let html = render_code_scene(&scene, &RenderOptions::default());

        assert_eq!(html.matches("class=\"phantom-row\"").count(), 1);
        assert!(html.contains("<div class=\"phantom-title\">variable</div>"));
        assert!(!html.contains("<div class=\"phantom-title\">call</div>"));
    }

    #[test]
    fn test_unmatched_anchor_is_silent() {
        let steps = vec![Step { add: vec![annotation("missing", "never")] }];
        let html = render_code_scene(&code_scene("x = 1", steps), &RenderOptions::default());
        assert!(!html.contains("phantom-row"));
        assert!(!html.contains("has-phantom-trigger"));
    }

    #[test]
    fn test_empty_line_renders_blank_row() {
        let lines = render_lines(&code_scene("a\n\nb", vec![]));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].text, " ");
        assert_eq!(lines[1].markup, " ");
    }

    #[test]
    fn test_state_does_not_leak_between_renders() {
        let scene = code_scene("s = '''\nopen", vec![]);
        let opts = RenderOptions::default();
        let first = render_code_scene(&scene, &opts);
        let second = render_code_scene(&scene, &opts);
        assert_eq!(first, second);

        let other = render_lines(&code_scene("x = 1", vec![]));
        assert_eq!(other[0].markup, r#"x = <span class="vs-num">1</span>"#);
    }

    #[test]
    fn test_document_contains_every_scene() {
        let content = r#"{
  "intro": [{"type": "team", "title": "Crew", "members": ["Ann", "Bo"]}],
  "units": [{"id": "a", "title": "a.py", "code": "pass"}]
}"#;
        let path = create_data_file("document", content);
        let data = Presentation::load(&path).expect("Could not load data");
        cleanup(&path);

        let html = render_document(&Deck::from_presentation(&data), &RenderOptions::default());
        assert!(html.contains("<section class=\"focus-card intro-layout\" data-scene=\"0\">"));
        assert!(html.contains("<section class=\"focus-card\" data-scene=\"1\">"));
        assert!(html.contains(r#"<span class="vs-control">pass</span>"#));
    }
}
