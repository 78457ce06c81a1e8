//! Rule engine
//!
//! A single left-to-right walk over an [`ArabicText`]. At every position
//! exactly one [`Rule`] fires, chosen by testing the rules in a fixed
//! priority order; the first whose guard holds wins. A rule may consume
//! characters beyond the current one (the divine name, an assimilated sun
//! letter, a long vowel's carrier) and may rewrite the token an earlier
//! position produced (vowel lengthening, the article over hamzat wasl).
//!
//! Every character is either consumed by exactly one firing or handled by
//! [`Rule::Default`], so the walk terminates after at most `len` steps.

use log::trace;

use super::text::{ArabicText, Position};
use crate::data::alphabet::*;
use crate::data::mapping::lookup;
use crate::data::punctuation;

/// One emitted piece of Latin text and the source index that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub origin: usize,
}

/// Append-only token buffer with two narrow in-place corrections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    tokens: Vec<Token>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, origin: usize, text: impl Into<String>) {
        self.tokens.push(Token {
            text: text.into(),
            origin,
        });
    }

    /// Overwrite the most recently emitted token
    ///
    /// Must only be called on a non-empty buffer.
    pub fn replace_last(&mut self, text: impl Into<String>) {
        debug_assert!(!self.tokens.is_empty(), "replace_last on empty output");
        if let Some(last) = self.tokens.last_mut() {
            last.text = text.into();
        }
    }

    /// Overwrite the latest token produced by source index `origin`
    ///
    /// Returns `false` (and changes nothing) when that index emitted nothing.
    pub fn replace_origin(&mut self, origin: usize, text: impl Into<String>) -> bool {
        match self.tokens.iter_mut().rev().find(|t| t.origin == origin) {
            Some(token) => {
                token.text = text.into();
                true
            }
            None => false,
        }
    }

    pub fn last(&self) -> Option<&str> {
        self.tokens.last().map(|t| t.text.as_str())
    }

    pub fn last_origin(&self) -> Option<usize> {
        self.tokens.last().map(|t| t.origin)
    }

    /// Token `n` places before the last one (`0` is the last token)
    pub fn nth_back(&self, n: usize) -> Option<&str> {
        self.tokens.iter().rev().nth(n).map(|t| t.text.as_str())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn join(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}

/// The transliteration rules, in the order they are tried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Punctuation,
    DivineName,
    Hamza,
    Lam,
    Alif,
    HamzatWasl,
    AlifMaksura,
    AlifMadda,
    KasraYa,
    DammaWaw,
    Shadda,
    Default,
}

impl Rule {
    /// Priority order; several guards can hold at once, so this order is
    /// part of the scheme and must not change
    pub const PRIORITY: [Rule; 12] = [
        Rule::Punctuation,
        Rule::DivineName,
        Rule::Hamza,
        Rule::Lam,
        Rule::Alif,
        Rule::HamzatWasl,
        Rule::AlifMaksura,
        Rule::AlifMadda,
        Rule::KasraYa,
        Rule::DammaWaw,
        Rule::Shadda,
        Rule::Default,
    ];

    /// Whether this rule's guard holds at `pos`
    pub fn matches(self, pos: Position<'_>) -> bool {
        let c = pos.char();
        match self {
            Rule::Punctuation => punctuation::is_punctuation(c),
            Rule::DivineName => divine_name_span(pos).is_some(),
            Rule::Hamza => is_hamza(c),
            Rule::Lam => c == LAM,
            Rule::Alif => c == ALIF,
            Rule::HamzatWasl => c == ALIF_WASLA,
            Rule::AlifMaksura => c == ALIF_MAKSURA,
            Rule::AlifMadda => c == ALIF_WITH_MADDA_ABOVE,
            Rule::KasraYa => c == KASRA && pos.peek(1) == Some(YA),
            Rule::DammaWaw => c == DAMMA && pos.peek(1) == Some(WAW),
            // An orphaned shadda at text start has nothing to geminate
            Rule::Shadda => c == SHADDA && pos.prev(1).is_some(),
            Rule::Default => true,
        }
    }

    /// First rule in priority order whose guard holds
    pub fn select(pos: Position<'_>) -> Rule {
        Self::PRIORITY
            .iter()
            .copied()
            .find(|rule| rule.matches(pos))
            .unwrap_or(Rule::Default)
    }
}

/// Offset from `pos` to the ha of a divine-name spelling starting here
///
/// Matches alif, lam, lam, ha, with an optional fatha on the alif.
fn divine_name_span(pos: Position<'_>) -> Option<usize> {
    if !pos.is(ALIF) {
        return None;
    }
    let lam = if pos.peek(1) == Some(FATHA) { 2 } else { 1 };
    let spelled = pos.peek(lam) == Some(LAM)
        && pos.peek(lam + 1) == Some(LAM)
        && pos.peek(lam + 2) == Some(HA);
    spelled.then_some(lam + 2)
}

/// Tanwin two or three places back: the word before, separated by one blank
fn follows_tanwin(pos: Position<'_>) -> bool {
    (2..=3).any(|n| pos.behind(n).is_some_and(is_tanwin))
}

/// Definite-article alif governing a lam
struct Article<'a> {
    alif: Position<'a>,
    /// Index of a fatha written on the alif, if the article is vocalized
    vowel: Option<usize>,
}

fn article_before(lam: Position<'_>) -> Option<Article<'_>> {
    let prev = lam.prev(1)?;
    if prev.is(ALIF) {
        return Some(Article {
            alif: prev,
            vowel: None,
        });
    }
    if prev.is(FATHA) {
        let alif = prev.prev(1).filter(|p| p.is(ALIF) && p.is_word_start())?;
        return Some(Article {
            alif,
            vowel: Some(prev.index()),
        });
    }
    None
}

/// Forward-scanning interpreter producing the raw token stream
pub struct RuleEngine<'a> {
    text: &'a ArabicText,
    cursor: usize,
    out: Output,
    after_tanwin: bool,
}

impl<'a> RuleEngine<'a> {
    pub fn new(text: &'a ArabicText) -> Self {
        Self {
            text,
            cursor: 0,
            out: Output::new(),
            after_tanwin: false,
        }
    }

    /// Walk the whole sequence and return the emitted tokens
    pub fn run(mut self) -> Output {
        while let Some(pos) = self.text.at(self.cursor) {
            self.track_tanwin(pos);
            let rule = Rule::select(pos);
            let consumed = self.apply(rule, pos);
            trace!(
                "{:>4} {:?} {:?} consumed {} -> {:?}",
                pos.index(),
                pos.char(),
                rule,
                consumed,
                self.out.last()
            );
            self.cursor += consumed;
        }
        self.out
    }

    fn track_tanwin(&mut self, pos: Position<'_>) {
        if is_tanwin(pos.char()) {
            self.after_tanwin = true;
        } else if !pos.is_blank() {
            self.after_tanwin = false;
        }
    }

    /// Fire `rule` at `pos`, returning how many positions it consumed (≥ 1)
    fn apply(&mut self, rule: Rule, pos: Position<'a>) -> usize {
        match rule {
            Rule::Punctuation => self.punctuation(pos),
            Rule::DivineName => self.divine_name(pos),
            Rule::Hamza => self.hamza(pos),
            Rule::Lam => self.lam(pos),
            Rule::Alif | Rule::AlifMaksura => self.lengthen(pos),
            Rule::HamzatWasl => {
                self.out.push(pos.index(), "i");
                1
            }
            Rule::AlifMadda => {
                let latin = if pos.is_start() { "ā" } else { "'ā" };
                self.out.push(pos.index(), latin);
                1
            }
            Rule::KasraYa => self.long_vowel(pos, "i", "ī", "iyy", &[(DAMMA, "u"), (FATHA, "a")]),
            Rule::DammaWaw => self.long_vowel(
                pos,
                "u",
                "ū",
                "uww",
                &[(DAMMA, "u"), (FATHA, "a"), (KASRA, "i")],
            ),
            Rule::Shadda => self.shadda(pos),
            Rule::Default => self.default(pos),
        }
    }

    fn punctuation(&mut self, pos: Position<'_>) -> usize {
        let c = pos.char();
        let latin = punctuation::render(c).unwrap_or_else(|| c.to_string());
        self.out.push(pos.index(), latin);
        1
    }

    fn divine_name(&mut self, pos: Position<'_>) -> usize {
        let Some(ha) = divine_name_span(pos) else {
            return self.default(pos);
        };

        let prefix = if pos.opens_phrase() {
            "al-"
        } else if self.after_tanwin || pos.behind(1).is_some_and(is_tanwin) {
            "il-"
        } else {
            "l-"
        };

        let vowel = match pos.peek(ha + 1) {
            Some(FATHA) => Some("a"),
            Some(DAMMA) => Some("u"),
            Some(KASRA) => Some("i"),
            _ => None,
        };

        match vowel {
            Some(v) => {
                self.out.push(pos.index(), format!("{}lāh{}", prefix, v));
                ha + 2
            }
            None => {
                self.out.push(pos.index(), format!("{}lāh", prefix));
                ha + 1
            }
        }
    }

    fn hamza(&mut self, pos: Position<'_>) -> usize {
        if pos.is_mid() {
            self.out.push(pos.index(), "'");
        }
        1
    }

    fn lam(&mut self, pos: Position<'_>) -> usize {
        let sun = match (pos.peek(1), pos.peek(2)) {
            (Some(letter), Some(SHADDA)) if is_sun_letter(letter) => Some(letter),
            _ => None,
        };
        let article = article_before(pos);

        if let Some(ref article) = article {
            let alif = article.alif;
            let prefix = match (alif.opens_phrase(), follows_tanwin(alif), sun.is_some()) {
                (true, _, true) => "a",
                (true, _, false) => "al-",
                (false, true, true) => "i",
                (false, true, false) => "il-",
                (false, false, true) => "",
                (false, false, false) => "l-",
            };
            // A vowel written on the article alif has already been emitted;
            // it becomes the prefix instead of sitting in front of it
            let rewritten = article
                .vowel
                .is_some_and(|v| self.out.replace_origin(v, prefix));
            if !rewritten {
                self.out.push(pos.index(), prefix);
            }
        } else if let Some(wasl) = pos.prev(1).filter(|p| p.is(ALIF_WASLA)) {
            let latin = if wasl.is_start() { "a" } else { "l-" };
            if !self.out.replace_origin(wasl.index(), latin) {
                self.out.push(pos.index(), latin);
            }
        } else {
            self.out.push(pos.index(), if sun.is_some() { "" } else { "l" });
        }

        let Some(letter) = sun else {
            return 1;
        };

        let word_start = match article {
            Some(ref article) => article.alif.is_word_start(),
            None => pos.prev(1).map_or(true, |p| p.is_word_start()),
        };
        let latin = lookup(letter);
        let sep = if word_start { "-" } else { "" };
        self.out
            .push(pos.index() + 1, format!("{}{}{}", latin, sep, latin));
        3
    }

    /// Alif or alif maksura after a fatha turns that fatha into a long ā
    fn lengthen(&mut self, pos: Position<'_>) -> usize {
        if let Some(fatha) = pos.prev(1).filter(|p| p.is(FATHA)) {
            // Only if the fatha's own token is the latest one; a fatha
            // swallowed by an earlier rule has nothing left to lengthen
            if self.out.last_origin() == Some(fatha.index()) {
                self.out.replace_last("ā");
            }
        }
        1
    }

    /// Short vowel followed by its long-vowel carrier (kasra+ya, damma+waw)
    fn long_vowel(
        &mut self,
        pos: Position<'_>,
        short: &str,
        long: &str,
        geminated: &str,
        glides: &[(char, &str)],
    ) -> usize {
        if pos.peek(2) == Some(SHADDA) {
            self.out.push(pos.index(), geminated);
            let glide = pos
                .peek(3)
                .and_then(|v| glides.iter().find(|(c, _)| *c == v).map(|(_, l)| *l));
            return match glide {
                Some(latin) => {
                    self.out.push(pos.index() + 3, latin);
                    4
                }
                None => 3,
            };
        }

        if !pos.peek(2).is_some_and(is_vowel) {
            self.out.push(pos.index(), long);
            2
        } else {
            self.out.push(pos.index(), short);
            1
        }
    }

    fn shadda(&mut self, pos: Position<'_>) -> usize {
        let Some(prev) = pos.prev(1) else {
            return self.default(pos);
        };
        let vowel = pos.behind(2);

        if prev.is(YA) {
            if (vowel == Some(KASRA) && pos.is_mid()) || vowel == Some(FATHA) {
                self.out.push(pos.index(), "y");
            }
        } else if prev.is(WAW) {
            if matches!(vowel, Some(DAMMA) | Some(FATHA)) {
                self.out.push(pos.index(), "w");
            }
        } else if prev.is_mid() && self.out.len() >= 2 && self.out.nth_back(1) != Some("l-") {
            self.out.push(pos.index(), lookup(prev.char()));
        }
        1
    }

    fn default(&mut self, pos: Position<'_>) -> usize {
        let latin = lookup(pos.char());
        self.out.push(pos.index(), latin);

        let unvoweled = matches!(pos.peek(1), Some(SUKUN) | Some(SMALL_HIGH_ROUNDED_ZERO));
        let after_initial_alif = pos
            .prev(1)
            .is_some_and(|p| p.is(ALIF) && p.is_word_start());
        if unvoweled && after_initial_alif {
            self.out.replace_last(format!("{}-", latin));
        }
        1
    }
}

/// Run the rule engine over `text`
pub fn run(text: &ArabicText) -> Output {
    RuleEngine::new(text).run()
}
