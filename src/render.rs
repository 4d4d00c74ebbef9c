// src/render.rs
//
// Token renderer.
//
// - List containers (<ol>/<ul>) are not lines of their own. They are inferred from
//   transitions between adjacent tokens by a three-state machine:
//       Outside --OrderedItem--> InOrdered --other--> Outside
//       Outside --UnorderedItem--> InUnordered --other--> Outside
//   Moving directly between the two list states closes the old container before
//   opening the new one.
// - The state is driven back to Outside after the last token, so a list running to
//   the end of the document is always closed.
// - One fragment per output line, joined with '\n', no trailing newline.

use crate::classify::{single_tag, BlockKind, Token};

/* ============================== Containers =============================== */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Container {
    Ordered,
    Unordered,
}

impl Container {
    pub fn tag(self) -> &'static str {
        match self {
            Container::Ordered => "ol",
            Container::Unordered => "ul",
        }
    }

    /// The container a run of `kind` lines lives in, if any.
    pub fn for_kind(kind: BlockKind) -> Option<Container> {
        match kind {
            BlockKind::OrderedItem => Some(Container::Ordered),
            BlockKind::UnorderedItem => Some(Container::Unordered),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListState {
    #[default]
    Outside,
    InOrdered,
    InUnordered,
}

impl ListState {
    fn container(self) -> Option<Container> {
        match self {
            ListState::Outside => None,
            ListState::InOrdered => Some(Container::Ordered),
            ListState::InUnordered => Some(Container::Unordered),
        }
    }

    fn from_container(container: Option<Container>) -> ListState {
        match container {
            None => ListState::Outside,
            Some(Container::Ordered) => ListState::InOrdered,
            Some(Container::Unordered) => ListState::InUnordered,
        }
    }

    /// Move to the state implied by the next token (`None` = end of document).
    /// Pushes the container events the transition produces, close before open.
    fn advance(&mut self, next: Option<BlockKind>, events: &mut Vec<Fragment>) {
        let target = ListState::from_container(next.and_then(Container::for_kind));
        if target == *self {
            return;
        }
        if let Some(open) = self.container() {
            events.push(Fragment::Close(open));
        }
        if let Some(new) = target.container() {
            events.push(Fragment::Open(new));
        }
        *self = target;
    }
}

/* =============================== Fragments =============================== */

/// One output line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fragment<'t, 'a> {
    Open(Container),
    Close(Container),
    Block(&'t Token<'a>),
}

impl Fragment<'_, '_> {
    pub fn to_html(&self) -> String {
        match self {
            Fragment::Open(c) => single_tag(c.tag(), false),
            Fragment::Close(c) => single_tag(c.tag(), true),
            Fragment::Block(token) => token.render(),
        }
    }
}

/// Interleave container events with the tokens, in output order.
pub fn fragments<'t, 'a>(tokens: &'t [Token<'a>]) -> Vec<Fragment<'t, 'a>> {
    let mut out = Vec::with_capacity(tokens.len() + 2);
    let mut state = ListState::default();
    for token in tokens {
        state.advance(Some(token.kind), &mut out);
        out.push(Fragment::Block(token));
    }
    state.advance(None, &mut out);
    out
}

pub fn render(tokens: &[Token<'_>]) -> String {
    let parts: Vec<String> = fragments(tokens).iter().map(Fragment::to_html).collect();
    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::tokenize;
    use pretty_assertions::assert_eq;

    fn html_lines(lines: &[&str]) -> Vec<String> {
        let tokens = tokenize(lines.iter().copied());
        fragments(&tokens).iter().map(Fragment::to_html).collect()
    }

    #[test]
    fn no_tokens_no_output() {
        assert_eq!(render(&[]), "");
        assert!(fragments(&[]).is_empty());
    }

    #[test]
    fn single_run_opens_and_closes_once() {
        assert_eq!(
            html_lines(&["* one", "* two", "* three"]),
            vec!["<ul>", "  <li>one</li>", "  <li>two</li>", "  <li>three</li>", "</ul>"]
        );
    }

    #[test]
    fn list_closes_before_following_paragraph() {
        assert_eq!(
            html_lines(&["* one", "B"]),
            vec!["<ul>", "  <li>one</li>", "</ul>", "<p>B</p>"]
        );
    }

    #[test]
    fn switching_list_kinds_closes_then_opens() {
        assert_eq!(
            html_lines(&["1. a", "* b"]),
            vec!["<ol>", "  <li>a</li>", "</ol>", "<ul>", "  <li>b</li>", "</ul>"]
        );
    }

    #[test]
    fn blank_line_splits_a_run() {
        assert_eq!(
            html_lines(&["* a", "", "* b"]),
            vec!["<ul>", "  <li>a</li>", "</ul>", "<br>", "<ul>", "  <li>b</li>", "</ul>"]
        );
    }

    #[test]
    fn first_token_never_gets_a_close() {
        let tokens = tokenize(["1. a"]);
        let events = fragments(&tokens);
        assert_eq!(events[0], Fragment::Open(Container::Ordered));
        assert_eq!(events.last(), Some(&Fragment::Close(Container::Ordered)));
    }

    #[test]
    fn opens_and_closes_balance() {
        let tokens = tokenize(["# h", "* a", "1. b", "1. c", "p", "* d", "", "2. e"]);
        let mut depth = 0i32;
        for event in fragments(&tokens) {
            match event {
                Fragment::Open(_) => depth += 1,
                Fragment::Close(_) => depth -= 1,
                Fragment::Block(_) => {}
            }
            assert!((0..=1).contains(&depth));
        }
        assert_eq!(depth, 0);
    }

    #[test]
    fn state_machine_transitions() {
        let mut state = ListState::default();
        let mut events = Vec::new();

        state.advance(Some(BlockKind::Paragraph), &mut events);
        assert_eq!(state, ListState::Outside);
        assert!(events.is_empty());

        state.advance(Some(BlockKind::OrderedItem), &mut events);
        assert_eq!(state, ListState::InOrdered);
        state.advance(Some(BlockKind::OrderedItem), &mut events);
        assert_eq!(events, vec![Fragment::Open(Container::Ordered)]);

        state.advance(None, &mut events);
        assert_eq!(state, ListState::Outside);
        assert_eq!(
            events,
            vec![
                Fragment::Open(Container::Ordered),
                Fragment::Close(Container::Ordered)
            ]
        );
    }
}
