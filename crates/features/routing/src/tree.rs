use crate::page::Page;
use pcx_domain::Tenant;
use std::cmp::Ordering;
use tracing::{debug, warn};

/// Upper bound on chained redirects followed by [`RouteTree::settle`].
const MAX_REDIRECTS: usize = 8;

/// What a matched route does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Page(Page),
    /// Replaces the current history entry with `to`.
    Redirect { to: &'static str },
}

/// One entry of a route table.
///
/// A node with children is a layout group: its page wraps every child, its
/// `index` target answers the group path itself, and child patterns are
/// relative to the group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteNode {
    pub pattern: &'static str,
    pub target: Target,
    pub index: Option<Target>,
    pub children: Vec<Self>,
}

impl RouteNode {
    #[must_use]
    pub const fn page(pattern: &'static str, page: Page) -> Self {
        Self { pattern, target: Target::Page(page), index: None, children: Vec::new() }
    }

    #[must_use]
    pub const fn redirect(pattern: &'static str, to: &'static str) -> Self {
        Self { pattern, target: Target::Redirect { to }, index: None, children: Vec::new() }
    }

    /// A layout group rendering `layout` around its children.
    #[must_use]
    pub fn layout(pattern: &'static str, layout: Page, children: impl IntoIterator<Item = Self>) -> Self {
        Self {
            pattern,
            target: Target::Page(layout),
            index: None,
            children: children.into_iter().collect(),
        }
    }

    /// Sets what the group path itself resolves to.
    #[must_use]
    pub const fn with_index(mut self, index: Target) -> Self {
        self.index = Some(index);
        self
    }
}

/// Path parameters bound by `:name` segments, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(Vec<(&'static str, String)>);

impl RouteParams {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|(key, _)| *key == name).map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(key, value)| (*key, value.as_str()))
    }
}

/// Outcome of matching a path against a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Render `page` inside `layouts` (outermost first).
    Render { layouts: Vec<Page>, page: Page, params: RouteParams },
    Redirect { to: &'static str },
    NotFound,
}

/// Where a path ends up after following redirects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settled {
    /// Final location; differs from the requested one after a redirect.
    pub path: String,
    pub resolution: Resolution,
}

impl Settled {
    #[must_use]
    pub fn redirected(&self, requested: &str) -> bool {
        self.path != requested
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Static(&'static str),
    Param(&'static str),
}

#[derive(Debug, Clone)]
struct Entry {
    pattern: String,
    segments: Vec<Segment>,
    layouts: Vec<Page>,
    target: Target,
}

/// A tenant's route table, flattened for matching.
#[derive(Debug, Clone)]
pub struct RouteTree {
    tenant: Tenant,
    entries: Vec<Entry>,
}

impl RouteTree {
    #[must_use]
    pub fn new(tenant: Tenant, nodes: impl IntoIterator<Item = RouteNode>) -> Self {
        let mut entries = Vec::new();
        for node in nodes {
            flatten(&node, &[], &[], &mut entries);
        }
        Self { tenant, entries }
    }

    #[must_use]
    pub const fn tenant(&self) -> Tenant {
        self.tenant
    }

    /// Every full pattern, in declaration order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.pattern.as_str())
    }

    /// Matches `path` against the table.
    ///
    /// Query and fragment are ignored, as are empty segments (so trailing
    /// slashes do not matter). Static segments compare case-insensitively and
    /// win over `:param` segments; otherwise the first declared route wins.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Resolution {
        let segments: Vec<&str> = pathname(path).split('/').filter(|s| !s.is_empty()).collect();

        let mut best: Option<(&Entry, Vec<bool>)> = None;
        for entry in &self.entries {
            let Some(rank) = rank(entry, &segments) else { continue };
            let better = best.as_ref().is_none_or(|(_, top)| rank.cmp(top) == Ordering::Greater);
            if better {
                best = Some((entry, rank));
            }
        }

        let Some((entry, _)) = best else {
            return Resolution::NotFound;
        };

        match entry.target {
            Target::Redirect { to } => Resolution::Redirect { to },
            Target::Page(page) => {
                let params = entry
                    .segments
                    .iter()
                    .zip(&segments)
                    .filter_map(|(segment, value)| match segment {
                        Segment::Param(name) => Some((*name, decode_param(value))),
                        Segment::Static(_) => None,
                    })
                    .collect();
                Resolution::Render { layouts: entry.layouts.clone(), page, params: RouteParams(params) }
            },
        }
    }

    /// Resolves `path`, following redirects to their destination.
    ///
    /// A redirect chain longer than the internal limit (a cycle) settles on
    /// [`Resolution::NotFound`] at the requested path, so callers do not
    /// navigate into the cycle.
    #[must_use]
    pub fn settle(&self, path: &str) -> Settled {
        let mut current = path.to_owned();
        for _ in 0..=MAX_REDIRECTS {
            match self.resolve(&current) {
                Resolution::Redirect { to } => {
                    debug!(tenant = %self.tenant, from = %current, to, "Following redirect");
                    to.clone_into(&mut current);
                },
                resolution => return Settled { path: current, resolution },
            }
        }
        warn!(tenant = %self.tenant, path, "Redirect limit reached");
        Settled { path: path.to_owned(), resolution: Resolution::NotFound }
    }
}

/// The path part of a location: everything before `?` or `#`.
#[must_use]
pub fn pathname(location: &str) -> &str {
    location.find(['?', '#']).map_or(location, |end| &location[..end])
}

/// Percent-decodes a bound segment; invalid UTF-8 keeps the raw text.
fn decode_param(raw: &str) -> String {
    urlencoding::decode(raw).map_or_else(|_| raw.to_owned(), std::borrow::Cow::into_owned)
}

fn flatten(node: &RouteNode, prefix: &[Segment], layouts: &[Page], out: &mut Vec<Entry>) {
    let mut segments = prefix.to_vec();
    segments.extend(parse(node.pattern));

    let group_layout = match node.target {
        Target::Page(page) if !node.children.is_empty() => page,
        target => {
            out.push(Entry { pattern: render(&segments), segments, layouts: layouts.to_vec(), target });
            return;
        },
    };

    let mut nested = layouts.to_vec();
    nested.push(group_layout);

    if let Some(index) = node.index {
        out.push(Entry {
            pattern: render(&segments),
            segments: segments.clone(),
            layouts: nested.clone(),
            target: index,
        });
    }
    for child in &node.children {
        flatten(child, &segments, &nested, out);
    }
}

fn parse(pattern: &'static str) -> impl Iterator<Item = Segment> {
    pattern.split('/').filter(|s| !s.is_empty()).map(|s| match s.strip_prefix(':') {
        Some(name) => Segment::Param(name),
        None => Segment::Static(s),
    })
}

fn render(segments: &[Segment]) -> String {
    if segments.is_empty() {
        return "/".to_owned();
    }
    segments.iter().fold(String::new(), |mut out, segment| {
        out.push('/');
        match segment {
            Segment::Static(s) => out.push_str(s),
            Segment::Param(name) => {
                out.push(':');
                out.push_str(name);
            },
        }
        out
    })
}

/// Per-segment specificity (`true` for static) if `entry` matches.
fn rank(entry: &Entry, segments: &[&str]) -> Option<Vec<bool>> {
    if entry.segments.len() != segments.len() {
        return None;
    }
    entry
        .segments
        .iter()
        .zip(segments)
        .map(|(pattern, value)| match pattern {
            Segment::Static(s) => s.eq_ignore_ascii_case(value).then_some(true),
            Segment::Param(_) => Some(false),
        })
        .collect()
}
