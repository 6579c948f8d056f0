//! Deterministic automaton behind a pattern.
//!
//! Thin wrapper over a `regex-automata` dense DFA. Only anchored start
//! states are built: scans pick their own begin offsets and step the DFA
//! byte by byte. DFAs report matches with a delay of one byte, so a match
//! state seen after consuming the byte at `p` means the match ended at `p`.

use regex_automata::dfa::{Automaton as _, StartKind, dense};
use regex_automata::nfa::thompson;
use regex_automata::util::primitives::StateID;
use regex_automata::{Anchored, Input, MatchKind};
use regex_syntax::hir::Hir;

#[derive(Clone, Debug)]
pub(crate) struct Automaton {
    dfa: dense::DFA<Vec<u32>>,
}

impl Automaton {
    /// Build a DFA for `hir`. A reverse automaton reads its input from the
    /// end towards the start.
    pub fn compile(hir: &Hir, reverse: bool) -> Result<Self, String> {
        let nfa = thompson::Compiler::new()
            .configure(
                thompson::Config::new()
                    .reverse(reverse)
                    .which_captures(thompson::WhichCaptures::None),
            )
            .build_from_hir(hir)
            .map_err(|e| e.to_string())?;

        // MatchKind::All keeps every thread alive, so match states reflect
        // plain language membership rather than leftmost-first priorities.
        let dfa = dense::Builder::new()
            .configure(
                dense::DFA::config()
                    .start_kind(StartKind::Anchored)
                    .match_kind(MatchKind::All)
                    .minimize(true),
            )
            .build_from_nfa(&nfa)
            .map_err(|e| e.to_string())?;

        Ok(Self { dfa })
    }

    fn start_forward(&self, haystack: &str, begin: usize) -> StateID {
        let input = Input::new(haystack).range(begin..).anchored(Anchored::Yes);
        self.dfa
            .start_state_forward(&input)
            .expect("anchored start state is always built")
    }

    fn start_reverse(&self, haystack: &str, end: usize) -> StateID {
        let input = Input::new(haystack).range(..end).anchored(Anchored::Yes);
        self.dfa
            .start_state_reverse(&input)
            .expect("anchored start state is always built")
    }

    #[inline]
    fn is_dead(&self, state: StateID) -> bool {
        self.dfa.is_dead_state(state) || self.dfa.is_quit_state(state)
    }

    #[inline]
    fn is_accepting(&self, state: StateID) -> bool {
        self.dfa.is_match_state(state)
    }

    /// Whether the whole of `haystack` is accepted.
    pub fn accepts(&self, haystack: &str) -> bool {
        let mut state = self.start_forward(haystack, 0);
        for &byte in haystack.as_bytes() {
            state = self.dfa.next_state(state, byte);
            if self.is_dead(state) {
                return false;
            }
        }
        self.is_accepting(self.dfa.next_eoi_state(state))
    }

    /// End of the shortest match starting exactly at `begin`.
    pub fn shortest_match_from(&self, haystack: &str, begin: usize) -> Option<usize> {
        let bytes = haystack.as_bytes();
        let mut state = self.start_forward(haystack, begin);
        for (pos, &byte) in bytes.iter().enumerate().skip(begin) {
            state = self.dfa.next_state(state, byte);
            if self.is_accepting(state) {
                return Some(pos);
            }
            if self.is_dead(state) {
                return None;
            }
        }
        self.is_accepting(self.dfa.next_eoi_state(state))
            .then_some(bytes.len())
    }

    /// Start of the shortest match ending exactly at `end`. Reverse
    /// automata only.
    pub fn shortest_match_before(&self, haystack: &str, end: usize) -> Option<usize> {
        let bytes = &haystack.as_bytes()[..end];
        let mut state = self.start_reverse(haystack, end);
        for (pos, &byte) in bytes.iter().enumerate().rev() {
            state = self.dfa.next_state(state, byte);
            if self.is_accepting(state) {
                return Some(pos + 1);
            }
            if self.is_dead(state) {
                return None;
            }
        }
        self.is_accepting(self.dfa.next_eoi_state(state))
            .then_some(0)
    }
}
