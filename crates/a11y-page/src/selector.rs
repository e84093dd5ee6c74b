//! CSS selector subset used by the in-memory document.
//!
//! Supports exactly what the engine's static selector tables need: type
//! selectors, `*`, attribute presence/`=`/`~=` tests, compound selectors,
//! the descendant combinator, and comma-separated lists.

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AttrOp {
    Exists,
    Equals,
    /// `~=`: whitespace-separated word match.
    Includes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AttrTest {
    pub name: String,
    pub op: AttrOp,
    pub value: String,
}

impl AttrTest {
    fn matches(&self, attrs: &BTreeMap<String, String>) -> bool {
        match attrs.get(&self.name) {
            None => false,
            Some(actual) => match self.op {
                AttrOp::Exists => true,
                AttrOp::Equals => actual == &self.value,
                AttrOp::Includes => actual.split_whitespace().any(|w| w == self.value),
            },
        }
    }
}

/// One simple-selector sequence, e.g. `input[type="image"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Compound {
    /// `None` means the universal selector.
    pub tag: Option<String>,
    pub attrs: Vec<AttrTest>,
}

impl Compound {
    pub fn matches(&self, tag: &str, attrs: &BTreeMap<String, String>) -> bool {
        if let Some(wanted) = &self.tag
            && !wanted.eq_ignore_ascii_case(tag)
        {
            return false;
        }
        self.attrs.iter().all(|test| test.matches(attrs))
    }
}

/// Descendant chain; the last compound matches the target element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Complex {
    pub compounds: Vec<Compound>,
}

/// Comma-separated selector alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SelectorList {
    pub alternatives: Vec<Complex>,
}

pub(crate) fn parse(selector: &str) -> SelectorList {
    let alternatives = split_top_level(selector, ',')
        .into_iter()
        .map(|part| Complex {
            compounds: split_top_level(&part, ' ')
                .into_iter()
                .filter(|c| !c.is_empty())
                .map(|c| parse_compound(&c))
                .collect(),
        })
        .filter(|c| !c.compounds.is_empty())
        .collect();
    SelectorList { alternatives }
}

/// Split on a separator outside brackets and quotes.
fn split_top_level(input: &str, sep: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    for ch in input.chars() {
        match quote {
            Some(q) => {
                current.push(ch);
                if ch == q {
                    quote = None;
                }
            }
            None => match ch {
                '"' | '\'' => {
                    current.push(ch);
                    quote = Some(ch);
                }
                '[' => {
                    depth += 1;
                    current.push(ch);
                }
                ']' => {
                    depth = depth.saturating_sub(1);
                    current.push(ch);
                }
                c if c == sep && depth == 0 => {
                    parts.push(current.trim().to_string());
                    current = String::new();
                }
                _ => current.push(ch),
            },
        }
    }
    if !current.trim().is_empty() {
        parts.push(current.trim().to_string());
    }
    parts
}

fn parse_compound(input: &str) -> Compound {
    let mut tag_part = String::new();
    let mut attrs = Vec::new();
    let mut rest = input;

    while let Some(open) = rest.find('[') {
        tag_part.push_str(&rest[..open]);
        let close = rest[open..].find(']').map_or(rest.len(), |c| open + c);
        attrs.push(parse_attr_test(&rest[open + 1..close]));
        rest = rest.get(close + 1..).unwrap_or("");
    }
    tag_part.push_str(rest);

    let tag_part = tag_part.trim();
    let tag = if tag_part.is_empty() || tag_part == "*" {
        None
    } else {
        Some(tag_part.to_ascii_lowercase())
    };
    Compound { tag, attrs }
}

fn parse_attr_test(body: &str) -> AttrTest {
    let (name, op, value) = if let Some(idx) = body.find("~=") {
        (&body[..idx], AttrOp::Includes, &body[idx + 2..])
    } else if let Some(idx) = body.find('=') {
        (&body[..idx], AttrOp::Equals, &body[idx + 1..])
    } else {
        (body, AttrOp::Exists, "")
    };
    AttrTest {
        name: name.trim().to_string(),
        op,
        value: value.trim().trim_matches(['"', '\'']).to_string(),
    }
}
