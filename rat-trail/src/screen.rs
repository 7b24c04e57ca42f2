//! Terminal projection of a document.
//!
//! Walks the shell regions and turns content nodes into styled lines,
//! collecting every anchor on the way so the host chrome can focus links
//! with the keyboard and hit-test mouse clicks.

use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::document::{Document, Node, NodePath};
use crate::router::navigator::{FOOTER_SLOT_ID, HEADER_SLOT_ID, PAGE_SLOT_ID};

/// A rendered anchor with its position on screen.
#[derive(Debug, Clone)]
pub struct Link {
    pub target: NodePath,
    pub href: String,
    pub row: u16,
    /// Start (inclusive) and end (exclusive) columns.
    pub cols: (u16, u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Header,
    Page,
    Footer,
}

#[derive(Debug, Clone)]
struct ProjectedLink {
    target: NodePath,
    href: String,
    region: Region,
    line: usize,
    cols: (u16, u16),
}

struct Projection {
    header: Vec<Line<'static>>,
    page: Vec<Line<'static>>,
    footer: Vec<Line<'static>>,
    links: Vec<ProjectedLink>,
}

/// Draws the document and tracks link focus between frames.
pub struct Screen {
    focus: usize,
    links: Vec<Link>,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            focus: 0,
            links: Vec::new(),
        }
    }

    /// Links found during the last draw, in document order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// The link the keyboard focus is on, if any.
    pub fn focused(&self) -> Option<&Link> {
        self.links.get(self.focus)
    }

    pub fn focus_next(&mut self) {
        if !self.links.is_empty() {
            self.focus = (self.focus + 1) % self.links.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.links.is_empty() {
            self.focus = (self.focus + self.links.len() - 1) % self.links.len();
        }
    }

    /// The link under the given terminal cell, if any.
    pub fn link_at(&self, column: u16, row: u16) -> Option<&Link> {
        self.links
            .iter()
            .find(|link| link.row == row && column >= link.cols.0 && column < link.cols.1)
    }

    /// Render the document into the frame and refresh the link positions.
    pub fn draw(&mut self, frame: &mut Frame, document: &Document) {
        if document.element(PAGE_SLOT_ID).is_none() {
            // Shell not mounted; nothing to project.
            let placeholder = Paragraph::new("Nothing to show").alignment(Alignment::Center);
            frame.render_widget(placeholder, frame.area());
            self.links.clear();
            self.focus = 0;
            return;
        }

        let projection = project(document, Some(self.focus));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(projection.header.len() as u16),
                Constraint::Min(0),
                Constraint::Length(projection.footer.len() as u16),
            ])
            .split(frame.area());

        frame.render_widget(Paragraph::new(projection.header), chunks[0]);
        frame.render_widget(Paragraph::new(projection.page), chunks[1]);
        frame.render_widget(Paragraph::new(projection.footer), chunks[2]);

        self.links = projection
            .links
            .into_iter()
            .filter_map(|link| {
                let area = match link.region {
                    Region::Header => chunks[0],
                    Region::Page => chunks[1],
                    Region::Footer => chunks[2],
                };
                if link.line as u16 >= area.height {
                    return None; // clipped off screen
                }
                Some(Link {
                    target: link.target,
                    href: link.href,
                    row: area.y + link.line as u16,
                    cols: link.cols,
                })
            })
            .collect();
        if self.focus >= self.links.len() {
            self.focus = 0;
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

fn project(document: &Document, focus: Option<usize>) -> Projection {
    let mut links = Vec::new();
    let header = project_region(document, HEADER_SLOT_ID, Region::Header, focus, &mut links);
    let page = project_region(document, PAGE_SLOT_ID, Region::Page, focus, &mut links);
    let footer = project_region(document, FOOTER_SLOT_ID, Region::Footer, focus, &mut links);
    Projection {
        header,
        page,
        footer,
        links,
    }
}

fn project_region(
    document: &Document,
    slot_id: &str,
    region: Region,
    focus: Option<usize>,
    links: &mut Vec<ProjectedLink>,
) -> Vec<Line<'static>> {
    let Some(path) = document.element_path(slot_id) else {
        return Vec::new();
    };
    let Some(slot) = document.node_at(&path) else {
        return Vec::new();
    };
    let mut builder = RegionBuilder {
        region,
        focus,
        lines: Vec::new(),
        current: Vec::new(),
        col: 0,
        links,
    };
    for (index, child) in slot.children().iter().enumerate() {
        builder.walk(child, &path.child(index));
    }
    builder.flush();
    builder.lines
}

struct RegionBuilder<'a> {
    region: Region,
    focus: Option<usize>,
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    col: u16,
    links: &'a mut Vec<ProjectedLink>,
}

impl RegionBuilder<'_> {
    fn walk(&mut self, node: &Node, path: &NodePath) {
        match node.tag() {
            "a" => self.anchor(node, path),
            "span" | "em" | "strong" => {
                if let Some(text) = node.text() {
                    let style = match node.tag() {
                        "em" => Style::default().add_modifier(Modifier::ITALIC),
                        "strong" => Style::default().add_modifier(Modifier::BOLD),
                        _ => Style::default(),
                    };
                    self.push_span(Span::styled(text.to_string(), style));
                }
                self.walk_children(node, path);
            }
            "h1" | "h2" => {
                self.flush();
                let style = Style::default().add_modifier(Modifier::BOLD);
                self.push_span(Span::styled(text_content(node), style));
                self.flush();
            }
            "li" => {
                self.flush();
                self.push_span(Span::styled("• ".to_string(), Style::default().fg(Color::DarkGray)));
                if let Some(text) = node.text() {
                    self.push_span(Span::raw(text.to_string()));
                }
                self.walk_children(node, path);
                self.flush();
            }
            _ => {
                self.flush();
                if let Some(text) = node.text() {
                    self.push_span(Span::raw(text.to_string()));
                }
                self.walk_children(node, path);
                self.flush();
            }
        }
    }

    fn walk_children(&mut self, node: &Node, path: &NodePath) {
        for (index, child) in node.children().iter().enumerate() {
            self.walk(child, &path.child(index));
        }
    }

    fn anchor(&mut self, node: &Node, path: &NodePath) {
        let label = match node.text() {
            Some(text) => text.to_string(),
            None => text_content(node),
        };
        let index = self.links.len();
        let mut style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED);
        if self.focus == Some(index) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        let start = self.col;
        self.push_span(Span::styled(label, style));
        self.links.push(ProjectedLink {
            target: path.clone(),
            href: node.attr("href").unwrap_or("/").to_string(),
            region: self.region,
            line: self.lines.len(),
            cols: (start, self.col),
        });
    }

    fn push_span(&mut self, span: Span<'static>) {
        self.col += span.content.chars().count() as u16;
        self.current.push(span);
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(Line::from(std::mem::take(&mut self.current)));
            self.col = 0;
        }
    }
}

fn text_content(node: &Node) -> String {
    fn collect(node: &Node, out: &mut String) {
        if let Some(text) = node.text() {
            out.push_str(text);
        }
        for child in node.children() {
            collect(child, out);
        }
    }
    let mut out = String::new();
    collect(node, &mut out);
    out
}
