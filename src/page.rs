use crate::deck::Deck;
use crate::highlight::escape_html;
use crate::scene::RenderOptions;
use std::fmt::{self, Write};

const CSS_STYLES: &str = r#"
:root {
  --c-bg: #1e1e1e; --c-fg: #d4d4d4; --c-blue: #569cd6; --c-purple: #c586c0;
  --c-orange: #ce9178; --c-green: #6a9955; --c-yellow: #dcdcaa; --c-teal: #4ec9b0;
  --c-num: #b5cea8; --c-var: #9cdcfe; --c-bracket: #ffd700;
}
body { margin: 0; background: #111; color: var(--c-fg); font-family: sans-serif; }
.focus-card { display: none; max-width: 1100px; margin: 40px auto; background: var(--c-bg);
  border-radius: 12px; overflow: hidden; transition: opacity .25s; }
.focus-card.active { display: block; }
.intro-wrapper { padding: 60px; text-align: center; }
.cover-sub { color: #aaa; font-size: 1.2rem; }
.cover-title { margin-top: 20px; }
.cover-big-text { font-size: 4rem; font-weight: bold; color: #fff; }
.intro-title { font-size: 3rem; font-weight: bold; margin-bottom: 30px; }
.feature-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 20px; }
.feature-box { display: flex; flex-direction: column; align-items: center; padding: 20px;
  background: #252526; border-radius: 8px; }
.member-box { align-items: flex-start; }
.member-name { color: var(--c-teal); font-family: 'JetBrains Mono', monospace; }
.feature-icon { font-size: 2rem; margin-bottom: 10px; }
.feature-title { font-size: 1.2rem; font-weight: bold; color: #fff; }
.feature-desc { color: #ccc; font-size: .9rem; }
.card-header { padding: 12px 20px; border-bottom: 1px solid #333; }
.unit-title { font-family: 'JetBrains Mono', monospace; color: #888; font-size: .9rem; }
.code-wrapper { padding: 16px 0; overflow: auto; max-height: 80vh; }
.code-editor-textarea { display: none; }
.edit-mode-active .code-editor-textarea { display: block; width: 100%; min-height: 300px; }
.edit-mode-active .code-container { display: none; }
.code-container { font-family: 'JetBrains Mono', monospace; font-size: 14px; white-space: pre; }
.code-line { padding: 0 20px; min-height: 1.4em; line-height: 1.4em; }
.has-phantom-trigger { cursor: pointer; }
.has-phantom-trigger:hover { background: #2a2d2e; }
.ai-trigger-icon { margin-right: 6px; }
.phantom-row { display: none; margin: 4px 20px 8px 40px; padding: 10px 14px; white-space: normal;
  border-left: 3px solid var(--c-purple); background: #252526; }
.phantom-row.active { display: block; }
.phantom-title { font-weight: bold; margin-bottom: 4px; color: #fff; }
.vs-keyword { color: var(--c-blue); }
.vs-control { color: var(--c-purple); }
.vs-string { color: var(--c-orange); }
.vs-comment { color: var(--c-green); font-style: italic; }
.vs-func { color: var(--c-yellow); }
.vs-class { color: var(--c-teal); }
.vs-num { color: var(--c-num); }
.vs-bracket { color: var(--c-bracket); }
.vs-var { color: var(--c-var); }
.load-error { color: red; position: fixed; top: 10px; left: 10px; z-index: 9999; font-family: monospace; }
"#;

const JS_SCRIPT: &str = r#"
(function () {
  const cards = Array.from(document.querySelectorAll('.focus-card'));
  let current = 0;
  function show(idx) {
    if (idx < 0 || idx >= cards.length) return;
    cards[current].classList.remove('active');
    current = idx;
    cards[current].classList.add('active');
  }
  document.addEventListener('keydown', function (e) {
    if (e.key === 'ArrowRight') show(current + 1);
    if (e.key === 'ArrowLeft') show(current - 1);
  });
  document.querySelectorAll('.has-phantom-trigger').forEach(function (trigger) {
    trigger.addEventListener('click', function (e) {
      e.stopPropagation();
      const row = document.getElementById(trigger.getAttribute('data-target-phantom'));
      if (!row) return;
      const open = trigger.classList.toggle('phantom-open');
      row.classList.toggle('active', open);
    });
  });
  if (cards.length > 0) cards[0].classList.add('active');
})();
"#;

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}\n<script>{}</script>\n</body>\n</html>\n",
        escape_html(title),
        CSS_STYLES,
        body,
        JS_SCRIPT
    )
}

/// Every scene of the deck in one standalone page, in deck order.
///
/// Phantom ids are prefixed per scene so lines in different scenes never
/// share an id.
pub fn render_document(deck: &Deck, opts: &RenderOptions) -> String {
    let mut body = String::new();
    for (i, scene) in deck.scenes().iter().enumerate() {
        let scene_opts = opts.clone().with_id_prefix(format!("{}s{}-", opts.id_prefix, i));
        let _ = writeln!(
            body,
            "<section class=\"{}\" data-scene=\"{}\">{}</section>",
            scene.card_class(),
            i,
            scene.render(&scene_opts)
        );
    }
    tracing::debug!(scenes = deck.len(), bytes = body.len(), "rendered document");
    document("Code Deck", &body)
}

/// Page shown instead of the deck when the data could not be loaded.
pub fn render_error_page(err: &dyn fmt::Display) -> String {
    let body = format!(
        "<div class=\"load-error\">Error: {}</div>",
        escape_html(&err.to_string())
    );
    document("Code Deck - error", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Annotation, Presentation, Step, Unit};

    fn deck() -> Deck {
        let unit = |id: &str| Unit {
            id: id.to_string(),
            title: format!("{}.py", id),
            code: "run()".to_string(),
            steps: vec![Step {
                add: vec![Annotation {
                    anchor: "run".to_string(),
                    title: "Run".to_string(),
                    content: "Starts".to_string(),
                }],
            }],
        };
        Deck::from_presentation(&Presentation {
            intro: vec![],
            units: vec![unit("a"), unit("b")],
        })
    }

    #[test]
    fn test_document_wraps_each_scene() {
        let html = render_document(&deck(), &RenderOptions::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(html.matches("<section class=\"focus-card\"").count(), 2);
        assert!(html.contains("id=\"s0-phantom-0\""));
        assert!(html.contains("id=\"s1-phantom-0\""));
    }

    #[test]
    fn test_error_page_is_visible() {
        let html = render_error_page(&"bad <json>");
        assert!(html.contains("<div class=\"load-error\">Error: bad &lt;json&gt;</div>"));
    }
}
