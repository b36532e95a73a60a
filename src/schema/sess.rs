use std::sync::Arc;

use annotate_snippets::display_list::{DisplayList, FormatOptions};
use annotate_snippets::snippet::*;
use codemap::{CodeMap, File};
use proc_macro2::{LineColumn, Span};

/// Schema source being loaded, used to render diagnostics against it.
#[derive(Debug)]
pub struct Sess {
    pub file: Arc<File>,
    pub color: bool,
}

impl Sess {
    pub fn new(name: &str, source: &str, color: bool) -> Sess {
        let mut code_map = CodeMap::new();
        Sess {
            file: code_map.add_file(name.into(), source.into()),
            color,
        }
    }

    pub fn source(self: &Self) -> &str {
        self.file.source()
    }

    /// Char offset of `lc` in the source, clamped to the end of its line.
    /// Columns and annotation ranges both count chars, not bytes.
    fn pos(self: &Self, lc: LineColumn) -> usize {
        let line_start = (self.file.line_span(lc.line - 1).low() - self.file.span.low()) as usize;
        let line_start = self.file.source()[..line_start].chars().count();
        line_start + lc.column.min(self.file.source_line(lc.line - 1).chars().count())
    }

    fn ann<'a>(
        self: &'a Self,
        annotation_type: AnnotationType,
        label: &'a str,
        span: Span,
    ) -> SourceAnnotation<'a> {
        SourceAnnotation {
            annotation_type,
            label,
            range: (self.pos(span.start()), self.pos(span.end())),
        }
    }

    pub fn error_ann<'a>(self: &'a Self, label: &'a str, span: Span) -> SourceAnnotation<'a> {
        self.ann(AnnotationType::Error, label, span)
    }

    pub fn help_ann<'a>(self: &'a Self, label: &'a str, span: Span) -> SourceAnnotation<'a> {
        self.ann(AnnotationType::Info, label, span)
    }

    pub fn error(self: &Self, message: &str, annotations: Vec<SourceAnnotation>) -> String {
        self.render(message, annotations, &[])
    }

    /// Like `error`, with notes printed below the source.
    pub fn error_with_notes(
        self: &Self,
        message: &str,
        annotations: Vec<SourceAnnotation>,
        notes: &[&str],
    ) -> String {
        self.render(message, annotations, notes)
    }

    fn render(self: &Self, message: &str, annotations: Vec<SourceAnnotation>, notes: &[&str]) -> String {
        let snippet = Snippet {
            title: Some(Annotation {
                id: None,
                label: Some(message),
                annotation_type: AnnotationType::Error,
            }),
            footer: notes
                .iter()
                .map(|note| Annotation {
                    id: None,
                    label: Some(note),
                    annotation_type: AnnotationType::Note,
                })
                .collect(),
            slices: vec![Slice {
                source: self.file.source(),
                line_start: 1,
                origin: Some(self.file.name()),
                fold: true,
                annotations,
            }],
            opt: FormatOptions {
                color: self.color,
                ..Default::default()
            },
        };

        DisplayList::from(snippet).to_string()
    }
}
