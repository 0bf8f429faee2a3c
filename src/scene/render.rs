use super::anchors::AnchorMap;
use super::lines::{display_text, split_lines};
use super::types::{Annotation, Feature, IntroSlide, Step, Unit};
use crate::highlight::{escape_attr, escape_html, highlight_line, ParserState};
use std::fmt::Write;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub edit_mode: bool,
    pub id_prefix: String,
}

impl RenderOptions {
    pub fn edit() -> Self {
        Self {
            edit_mode: true,
            ..Self::default()
        }
    }

    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    fn editable(&self) -> &'static str {
        if self.edit_mode {
            " contenteditable=\"true\""
        } else {
            ""
        }
    }

    fn phantom_id(&self, index: usize) -> String {
        format!("{}phantom-{}", self.id_prefix, index)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CodeScene {
    pub unit_id: String,
    pub title: String,
    pub code: String,
    pub steps: Vec<Step>,
    focus: Option<(String, Annotation)>,
}

impl CodeScene {
    pub fn from_unit(unit: &Unit) -> Self {
        Self {
            unit_id: unit.id.clone(),
            title: unit.title.clone(),
            code: unit.code.clone(),
            steps: unit.steps.clone(),
            focus: None,
        }
    }

    /// Bind `detail` to `anchor` after all steps, overriding any earlier binding.
    pub fn with_focus(mut self, anchor: impl Into<String>, detail: Annotation) -> Self {
        self.focus = Some((anchor.into(), detail));
        self
    }

    pub fn focus(&self) -> Option<(&str, &Annotation)> {
        self.focus.as_ref().map(|(a, d)| (a.as_str(), d))
    }

    pub fn anchor_map(&self) -> AnchorMap {
        let mut map = AnchorMap::from_steps(&self.steps);
        if let Some((anchor, detail)) = &self.focus {
            map.focus(anchor, detail);
        }
        map
    }
}

/// Highlighted form of one source line and the annotation it triggers.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRender {
    pub index: usize,
    pub text: String,
    pub markup: String,
    pub annotation: Option<Annotation>,
}

/// Highlight every line of the scene in order, threading parser state from
/// each line into the next, and attach the first matching annotation.
pub fn render_lines(scene: &CodeScene) -> Vec<LineRender> {
    let anchors = scene.anchor_map();
    let mut state = ParserState::new();

    let rendered: Vec<LineRender> = split_lines(&scene.code)
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let text = display_text(line);
            let markup = highlight_line(text, &mut state);
            LineRender {
                index,
                text: text.to_string(),
                markup,
                annotation: anchors.find_in(text).cloned(),
            }
        })
        .collect();

    if state.in_unterminated_string() {
        tracing::debug!(unit = %scene.unit_id, "code ends inside a multi-line string");
    }
    for annotation in anchors.iter() {
        let used = rendered
            .iter()
            .any(|l| l.annotation.as_ref().map(|a| &a.anchor) == Some(&annotation.anchor));
        if !used {
            tracing::debug!(
                unit = %scene.unit_id,
                anchor = %annotation.anchor,
                "anchor matched no line"
            );
        }
    }

    rendered
}

/// Markup for one line wrapper, including its collapsible annotation row.
pub fn render_line(line: &LineRender, opts: &RenderOptions) -> String {
    let phantom_id = opts.phantom_id(line.index);
    let mut out = String::new();

    let (trigger_class, trigger_icon) = match line.annotation {
        Some(_) => (" has-phantom-trigger", "<span class=\"ai-trigger-icon\">✨</span>"),
        None => ("", ""),
    };

    let _ = write!(
        out,
        "<div class=\"code-line-wrapper\"><div class=\"code-line{}\" data-text=\"{}\" data-target-phantom=\"{}\">{}{}</div>",
        trigger_class,
        escape_attr(&line.text),
        phantom_id,
        trigger_icon,
        line.markup
    );

    if let Some(annotation) = &line.annotation {
        // Annotation bodies are authored markup and go in verbatim.
        let _ = write!(
            out,
            "<div class=\"phantom-row\" id=\"{}\"><div class=\"phantom-content\"><div class=\"phantom-title\">{}</div><div class=\"phantom-body\">{}</div></div></div>",
            phantom_id,
            escape_html(&annotation.title),
            annotation.content
        );
    }

    out.push_str("</div>");
    out
}

/// Full markup for a code scene: title header plus the highlighted code body.
pub fn render_code_scene(scene: &CodeScene, opts: &RenderOptions) -> String {
    let lines = render_lines(scene);
    let annotated = lines.iter().filter(|l| l.annotation.is_some()).count();
    tracing::debug!(
        unit = %scene.unit_id,
        lines = lines.len(),
        annotated,
        "rendered code scene"
    );

    let body: String = lines.iter().map(|l| render_line(l, opts)).collect();
    let mode_class = if opts.edit_mode { " edit-mode-active" } else { "" };

    format!(
        "<div class=\"card-header\"><div class=\"unit-title\"{edit} data-key=\"unit-title\">{title}</div></div>\
<div class=\"code-wrapper{mode}\"><textarea class=\"code-editor-textarea\" data-key=\"source-code\" spellcheck=\"false\">{code}</textarea>\
<div class=\"code-container\">{body}</div></div>",
        edit = opts.editable(),
        title = escape_html(&scene.title),
        mode = mode_class,
        code = escape_html(&scene.code),
        body = body
    )
}

pub fn render_intro(slide: &IntroSlide, opts: &RenderOptions) -> String {
    let edit = opts.editable();
    let inner = match slide {
        IntroSlide::Cover {
            title,
            subtitle,
            big_text,
        } => format!(
            "<div class=\"cover-sub\"{edit} data-key=\"subtitle\">{}</div>\
<div class=\"cover-big-text\"{edit} data-key=\"big_text\">{}</div>\
<div class=\"cover-sub cover-title\"{edit} data-key=\"title\">{}</div>",
            escape_html(subtitle),
            escape_html(big_text),
            escape_html(title),
        ),
        IntroSlide::Team { title, members } => {
            let members: String = members
                .iter()
                .enumerate()
                .map(|(i, m)| {
                    format!(
                        "<div class=\"feature-box member-box\"><div class=\"member-name\"{edit} data-key=\"member\" data-idx=\"{i}\">{}</div></div>",
                        escape_html(m)
                    )
                })
                .collect();
            format!(
                "<h2 class=\"intro-title\"{edit} data-key=\"title\">{}</h2><div class=\"feature-grid\">{members}</div>",
                escape_html(title)
            )
        }
        IntroSlide::Features { title, items } => {
            let items: String = items
                .iter()
                .enumerate()
                .map(|(i, item)| render_feature(i, item, edit))
                .collect();
            format!(
                "<h2 class=\"intro-title\"{edit} data-key=\"title\">{}</h2><div class=\"feature-grid\">{items}</div>",
                escape_html(title)
            )
        }
    };

    format!("<div class=\"intro-wrapper\">{}</div>", inner)
}

fn render_feature(i: usize, item: &Feature, edit: &str) -> String {
    format!(
        "<div class=\"feature-box\"><div class=\"feature-icon\">{}</div>\
<div class=\"feature-title\"{edit} data-key=\"feature-title\" data-idx=\"{i}\">{}</div>\
<div class=\"feature-desc\"{edit} data-key=\"feature-desc\" data-idx=\"{i}\">{}</div></div>",
        escape_html(&item.icon),
        escape_html(&item.title),
        escape_html(&item.desc),
    )
}
