//! The ordered substitution rules that map Kruti Dev glyph codes to Unicode.

use crate::error::RuleError;

/// A single substitution: every occurrence of `pattern` is replaced by `replacement`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub pattern: &'static str,
    pub replacement: &'static str,
}

impl Rule {
    pub const fn new(pattern: &'static str, replacement: &'static str) -> Self {
        Rule {
            pattern,
            replacement,
        }
    }
}

/// An ordered list of rules that has been checked for the table invariants.
///
/// Rules are applied strictly in order. A rule whose pattern is a prefix of another rule's
/// pattern must come after it, otherwise the shorter rule would consume the start of the
/// longer match first. No pattern may appear twice.
#[derive(Copy, Clone, Debug)]
pub struct RuleTable<'a> {
    rules: &'a [Rule],
}

impl<'a> RuleTable<'a> {
    pub fn new(rules: &'a [Rule]) -> Result<Self, RuleError> {
        validate(rules)?;
        Ok(RuleTable { rules })
    }

    /// The rules in the order they are applied.
    pub fn rules(&self) -> &'a [Rule] {
        self.rules
    }

    /// Apply every rule in table order as a whole-string find and replace.
    ///
    /// Each rule replaces all non-overlapping occurrences before the next rule runs, so later
    /// rules see the output of earlier ones.
    pub fn substitute(&self, text: &str) -> String {
        let mut buf = text.to_owned();
        for rule in self.rules {
            if buf.contains(rule.pattern) {
                buf = buf.replace(rule.pattern, rule.replacement);
            }
        }
        buf
    }
}

impl RuleTable<'static> {
    /// The built-in Kruti Dev 010 table.
    pub fn krutidev() -> Self {
        RuleTable {
            rules: KRUTIDEV_RULES,
        }
    }
}

impl Default for RuleTable<'static> {
    fn default() -> Self {
        RuleTable::krutidev()
    }
}

fn validate(rules: &[Rule]) -> Result<(), RuleError> {
    for (i, earlier) in rules.iter().enumerate() {
        if earlier.pattern.is_empty() {
            return Err(RuleError::EmptyPattern { index: i });
        }
        for (j, later) in rules.iter().enumerate().skip(i + 1) {
            if later.pattern == earlier.pattern {
                return Err(RuleError::DuplicatePattern {
                    first: i,
                    second: j,
                });
            } else if later.pattern.starts_with(earlier.pattern) {
                return Err(RuleError::ShadowedPattern {
                    shorter: i,
                    longer: j,
                });
            }
        }
    }
    Ok(())
}

/////////////////////////////////////////////////////////////////////////////
// Kruti Dev 010 rule table
/////////////////////////////////////////////////////////////////////////////

// Some glyph codes have more than one reading in the font (e.g. `&` is both a dash and the
// micro sign). Where the pattern alone cannot tell them apart the first reading wins and the
// others are lost.
#[rustfmt::skip]
pub const KRUTIDEV_RULES: &[Rule] = &[
    // Abbreviation sign, marker and quotation fix-ups
    Rule::new("\u{00F1}", "\u{0970}"), // ñ -> ॰
    Rule::new("Q+Z", "QZ+"), // Q+Z -> QZ+
    Rule::new("sas", "sa"), // sas -> sa
    Rule::new("aa", "a"), // aa -> a
    Rule::new(")Z", "\u{0930}\u{094D}\u{0926}\u{094D}\u{0927}"), // )Z -> र◌्द◌्ध
    Rule::new("ZZ", "Z"), // ZZ -> Z
    Rule::new("\u{2018}", "\""), // ‘ -> "
    Rule::new("\u{2019}", "\""), // ’ -> "
    Rule::new("\u{201C}", "'"), // “ -> '
    Rule::new("\u{201D}", "'"), // ” -> '

    // Numerals
    Rule::new("\u{00E5}", "\u{0966}"), // å -> ०
    Rule::new("\u{0192}", "\u{0967}"), // ƒ -> १
    Rule::new("\u{201E}", "\u{0968}"), // „ -> २
    Rule::new("\u{2026}", "\u{0969}"), // … -> ३
    Rule::new("\u{2020}", "\u{096A}"), // † -> ४
    Rule::new("\u{2021}", "\u{096B}"), // ‡ -> ५
    Rule::new("\u{02C6}", "\u{096C}"), // ˆ -> ६
    Rule::new("\u{2030}", "\u{096D}"), // ‰ -> ७
    Rule::new("\u{0160}", "\u{096E}"), // Š -> ८
    Rule::new("\u{2039}", "\u{096F}"), // ‹ -> ९

    // Nukta forms
    Rule::new("\u{00B6}+", "\u{095E}\u{094D}"), // ¶+ -> फ़◌्
    Rule::new("d+", "\u{0958}"), // d+ -> क़
    Rule::new("[+k", "\u{0959}"), // [+k -> ख़
    Rule::new("[+", "\u{0959}\u{094D}"), // [+ -> ख़◌्
    Rule::new("x+", "\u{095A}"), // x+ -> ग़
    Rule::new("T+", "\u{091C}\u{093C}\u{094D}"), // T+ -> ज◌़◌्
    Rule::new("t+", "\u{095B}"), // t+ -> ज़
    Rule::new("M+", "\u{095C}"), // M+ -> ड़
    Rule::new("<+", "\u{095D}"), // <+ -> ढ़
    Rule::new("Q+", "\u{095E}"), // Q+ -> फ़
    Rule::new(";+", "\u{095F}"), // ;+ -> य़
    Rule::new("j+", "\u{0931}"), // j+ -> ऱ
    Rule::new("u+", "\u{0929}"), // u+ -> ऩ

    // Conjuncts rendered as a single glyph
    Rule::new("\u{00D9}k", "\u{0924}\u{094D}\u{0924}"), // Ùk -> त◌्त
    Rule::new("\u{00D9}", "\u{0924}\u{094D}\u{0924}\u{094D}"), // Ù -> त◌्त◌्
    Rule::new("\u{00E4}", "\u{0915}\u{094D}\u{0924}"), // ä -> क◌्त
    Rule::new("\u{2013}", "\u{0926}\u{0943}"), // – -> द◌ृ
    Rule::new("\u{2014}", "\u{0915}\u{0943}"), // — -> क◌ृ
    Rule::new("\u{00E9}", "\u{0928}\u{094D}\u{0928}"), // é -> न◌्न
    Rule::new("\u{2122}", "\u{0928}\u{094D}\u{0928}\u{094D}"), // ™ -> न◌्न◌्
    Rule::new("=kk", "=k"), // =kk -> =k
    Rule::new("f=k", "f="), // f=k -> f=
    Rule::new("\u{00E0}", "\u{0939}\u{094D}\u{0928}"), // à -> ह◌्न
    Rule::new("\u{00E1}", "\u{0939}\u{094D}\u{092F}"), // á -> ह◌्य
    Rule::new("\u{00E2}", "\u{0939}\u{0943}"), // â -> ह◌ृ
    Rule::new("\u{00E3}", "\u{0939}\u{094D}\u{092E}"), // ã -> ह◌्म
    Rule::new("\u{00BA}z", "\u{0939}\u{094D}\u{0930}"), // ºz -> ह◌्र
    Rule::new("\u{00BA}", "\u{0939}\u{094D}"), // º -> ह◌्
    Rule::new("\u{00ED}", "\u{0926}\u{094D}\u{0926}"), // í -> द◌्द
    Rule::new("{k", "\u{0915}\u{094D}\u{0937}"), // {k -> क◌्ष
    Rule::new("{", "\u{0915}\u{094D}\u{0937}\u{094D}"), // { -> क◌्ष◌्
    Rule::new("=", "\u{0924}\u{094D}\u{0930}"), // = -> त◌्र
    Rule::new("\u{00AB}", "\u{0924}\u{094D}\u{0930}\u{094D}"), // « -> त◌्र◌्

    // Conjuncts with ya
    Rule::new("N\u{00EE}", "\u{091B}\u{094D}\u{092F}"), // Nî -> छ◌्य
    Rule::new("V\u{00EE}", "\u{091F}\u{094D}\u{092F}"), // Vî -> ट◌्य
    Rule::new("B\u{00EE}", "\u{0920}\u{094D}\u{092F}"), // Bî -> ठ◌्य
    Rule::new("M\u{00EE}", "\u{0921}\u{094D}\u{092F}"), // Mî -> ड◌्य
    Rule::new("<\u{00EE}", "\u{0922}\u{094D}\u{092F}"), // <î -> ढ◌्य

    // Other special conjuncts
    Rule::new("|", "\u{0926}\u{094D}\u{092F}"), // | -> द◌्य
    Rule::new("K", "\u{091C}\u{094D}\u{091E}"), // K -> ज◌्ञ
    Rule::new("}", "\u{0926}\u{094D}\u{0935}"), // } -> द◌्व
    Rule::new("J", "\u{0936}\u{094D}\u{0930}"), // J -> श◌्र

    // Conjuncts with ra
    Rule::new("V\u{00AA}", "\u{091F}\u{094D}\u{0930}"), // Vª -> ट◌्र
    Rule::new("M\u{00AA}", "\u{0921}\u{094D}\u{0930}"), // Mª -> ड◌्र
    Rule::new("<\u{00AA}\u{00AA}", "\u{0922}\u{094D}\u{0930}"), // <ªª -> ढ◌्र
    Rule::new("N\u{00AA}", "\u{091B}\u{094D}\u{0930}"), // Nª -> छ◌्र
    Rule::new("\u{00D8}", "\u{0915}\u{094D}\u{0930}"), // Ø -> क◌्र
    Rule::new("\u{00DD}", "\u{092B}\u{094D}\u{0930}"), // Ý -> फ◌्र
    Rule::new("nzZ", "\u{0930}\u{094D}\u{0926}\u{094D}\u{0930}"), // nzZ -> र◌्द◌्र
    Rule::new("\u{00E6}", "\u{0926}\u{094D}\u{0930}"), // æ -> द◌्र
    Rule::new("\u{00E7}", "\u{092A}\u{094D}\u{0930}"), // ç -> प◌्र
    Rule::new("\u{00C1}", "\u{092A}\u{094D}\u{0930}"), // Á -> प◌्र
    Rule::new("xz", "\u{0917}\u{094D}\u{0930}"), // xz -> ग◌्र

    // Ra with a vowel sign
    Rule::new("#", "\u{0930}\u{0941}"), // # -> र◌ु
    Rule::new(":", "\u{0930}\u{0942}"), // : -> र◌ू

    // Independent vowels
    Rule::new("v\u{201A}", "\u{0911}"), // v‚ -> ऑ
    Rule::new("vks", "\u{0913}"), // vks -> ओ
    Rule::new("vkS", "\u{0914}"), // vkS -> औ
    Rule::new("vk", "\u{0906}"), // vk -> आ
    Rule::new("v", "\u{0905}"), // v -> अ
    Rule::new("b\u{00B1}", "\u{0908}\u{0902}"), // b± -> ई◌ं
    Rule::new("\u{00C3}", "\u{0908}"), // Ã -> ई
    Rule::new("bZ", "\u{0908}"), // bZ -> ई
    Rule::new("b", "\u{0907}"), // b -> इ
    Rule::new("m", "\u{0909}"), // m -> उ
    Rule::new("\u{00C5}", "\u{090A}"), // Å -> ऊ
    Rule::new(",s", "\u{0910}"), // ,s -> ऐ
    Rule::new(",", "\u{090F}"), // , -> ए
    Rule::new("_", "\u{090B}"), // _ -> ऋ

    // Consonants and their half forms
    Rule::new("\u{00F4}", "\u{0915}\u{094D}\u{0915}"), // ô -> क◌्क
    Rule::new("d", "\u{0915}"), // d -> क
    Rule::new("Dk", "\u{0915}"), // Dk -> क
    Rule::new("D", "\u{0915}\u{094D}"), // D -> क◌्
    Rule::new("[k", "\u{0916}"), // [k -> ख
    Rule::new("[", "\u{0916}\u{094D}"), // [ -> ख◌्
    Rule::new("x", "\u{0917}"), // x -> ग
    Rule::new("Xk", "\u{0917}"), // Xk -> ग
    Rule::new("X", "\u{0917}\u{094D}"), // X -> ग◌्
    Rule::new("\u{00C4}", "\u{0918}"), // Ä -> घ
    Rule::new("?k", "\u{0918}"), // ?k -> घ
    Rule::new("?", "\u{0918}\u{094D}"), // ? -> घ◌्
    Rule::new("\u{00B3}", "\u{0919}"), // ³ -> ङ
    Rule::new("pkS", "\u{091A}\u{0948}"), // pkS -> च◌ै
    Rule::new("p", "\u{091A}"), // p -> च
    Rule::new("Pk", "\u{091A}"), // Pk -> च
    Rule::new("P", "\u{091A}\u{094D}"), // P -> च◌्
    Rule::new("N", "\u{091B}"), // N -> छ
    Rule::new("t", "\u{091C}"), // t -> ज
    Rule::new("Tk", "\u{091C}"), // Tk -> ज
    Rule::new("T", "\u{091C}\u{094D}"), // T -> ज◌्
    Rule::new(">", "\u{091D}"), // > -> झ
    Rule::new("\u{00F7}", "\u{091D}\u{094D}"), // ÷ -> झ◌्
    Rule::new("\u{00A5}", "\u{091E}"), // ¥ -> ञ
    Rule::new("\u{00EA}", "\u{091F}\u{094D}\u{091F}"), // ê -> ट◌्ट
    Rule::new("\u{00EB}", "\u{091F}\u{094D}\u{0920}"), // ë -> ट◌्ठ
    Rule::new("V", "\u{091F}"), // V -> ट
    Rule::new("B", "\u{0920}"), // B -> ठ
    Rule::new("\u{00EC}", "\u{0921}\u{094D}\u{0921}"), // ì -> ड◌्ड
    Rule::new("\u{00EF}", "\u{0921}\u{094D}\u{0922}"), // ï -> ड◌्ढ
    Rule::new("M", "\u{0921}"), // M -> ड
    Rule::new("<", "\u{0922}"), // < -> ढ
    Rule::new(".k", "\u{0923}"), // .k -> ण
    Rule::new(".", "\u{0923}\u{094D}"), // . -> ण◌्
    Rule::new("r", "\u{0924}"), // r -> त
    Rule::new("Rk", "\u{0924}"), // Rk -> त
    Rule::new("R", "\u{0924}\u{094D}"), // R -> त◌्
    Rule::new("Fk", "\u{0925}"), // Fk -> थ
    Rule::new("F", "\u{0925}\u{094D}"), // F -> थ◌्
    Rule::new(")", "\u{0926}\u{094D}\u{0927}"), // ) -> द◌्ध
    Rule::new("n", "\u{0926}"), // n -> द
    Rule::new("/k", "\u{0927}"), // /k -> ध
    Rule::new("/", "\u{0927}\u{094D}"), // / -> ध◌्
    Rule::new("\u{00CB}", "\u{0927}\u{094D}"), // Ë -> ध◌्
    Rule::new("\u{00E8}", "\u{0927}"), // è -> ध
    Rule::new("u", "\u{0928}"), // u -> न
    Rule::new("Uk", "\u{0928}"), // Uk -> न
    Rule::new("U", "\u{0928}\u{094D}"), // U -> न◌्
    Rule::new("i", "\u{092A}"), // i -> प
    Rule::new("Ik", "\u{092A}"), // Ik -> प
    Rule::new("I", "\u{092A}\u{094D}"), // I -> प◌्
    Rule::new("Q", "\u{092B}"), // Q -> फ
    Rule::new("\u{00B6}", "\u{092B}\u{094D}"), // ¶ -> फ◌्
    Rule::new("c", "\u{092C}"), // c -> ब
    Rule::new("Ck", "\u{092C}"), // Ck -> ब
    Rule::new("C", "\u{092C}\u{094D}"), // C -> ब◌्
    Rule::new("Hk", "\u{092D}"), // Hk -> भ
    Rule::new("H", "\u{092D}\u{094D}"), // H -> भ◌्
    Rule::new("e", "\u{092E}"), // e -> म
    Rule::new("Ek", "\u{092E}"), // Ek -> म
    Rule::new("E", "\u{092E}\u{094D}"), // E -> म◌्
    Rule::new(";", "\u{092F}"), // ; -> य
    Rule::new("\u{00B8}", "\u{092F}\u{094D}"), // ¸ -> य◌्
    Rule::new("j", "\u{0930}"), // j -> र
    Rule::new("y", "\u{0932}"), // y -> ल
    Rule::new("Yk", "\u{0932}"), // Yk -> ल
    Rule::new("Y", "\u{0932}\u{094D}"), // Y -> ल◌्
    Rule::new("G", "\u{0933}"), // G -> ळ
    Rule::new("o", "\u{0935}"), // o -> व
    Rule::new("Ok", "\u{0935}"), // Ok -> व
    Rule::new("O", "\u{0935}\u{094D}"), // O -> व◌्
    Rule::new("'k", "\u{0936}"), // 'k -> श
    Rule::new("'", "\u{0936}\u{094D}"), // ' -> श◌्
    Rule::new("\"k", "\u{0937}"), // "k -> ष
    Rule::new("\"", "\u{0937}\u{094D}"), // " -> ष◌्
    Rule::new("l", "\u{0938}"), // l -> स
    Rule::new("Lk", "\u{0938}"), // Lk -> स
    Rule::new("L", "\u{0938}\u{094D}"), // L -> स◌्
    Rule::new("g", "\u{0939}"), // g -> ह

    // Vowel signs and modifiers
    Rule::new("\u{00C8}", "\u{0940}\u{0902}"), // È -> ◌ी◌ं
    Rule::new("saz", "\u{094D}\u{0930}\u{0947}\u{0902}"), // saz -> ◌्र◌े◌ं
    Rule::new("z", "\u{094D}\u{0930}"), // z -> ◌्र
    Rule::new("\u{00DC}", "\u{0936}\u{094D}"), // Ü -> श◌्
    Rule::new("\u{201A}", "\u{0949}"), // ‚ -> ◌ॉ
    Rule::new("kas", "\u{094B}\u{0902}"), // kas -> ◌ो◌ं
    Rule::new("ks", "\u{094B}"), // ks -> ◌ो
    Rule::new("kS", "\u{094C}"), // kS -> ◌ौ
    Rule::new("\u{00A1}k", "\u{093E}\u{0901}"), // ¡k -> ◌ा◌ँ
    Rule::new("ak", "k\u{0902}"), // ak -> k◌ं
    Rule::new("k", "\u{093E}"), // k -> ◌ा
    Rule::new("ah", "\u{0940}\u{0902}"), // ah -> ◌ी◌ं
    Rule::new("h", "\u{0940}"), // h -> ◌ी
    Rule::new("aq", "\u{0941}\u{0902}"), // aq -> ◌ु◌ं
    Rule::new("q", "\u{0941}"), // q -> ◌ु
    Rule::new("aw", "\u{0942}\u{0902}"), // aw -> ◌ू◌ं
    Rule::new("\u{00A1}w", "\u{0942}\u{0901}"), // ¡w -> ◌ू◌ँ
    Rule::new("w", "\u{0942}"), // w -> ◌ू
    Rule::new("`", "\u{0943}"), // ` -> ◌ृ
    Rule::new("\u{0300}", "\u{0943}"), // ◌̀ -> ◌ृ
    Rule::new("as", "\u{0947}\u{0902}"), // as -> ◌े◌ं
    Rule::new("\u{00B1}s", "s\u{00B1}"), // ±s -> s±
    Rule::new("s", "\u{0947}"), // s -> ◌े
    Rule::new("aS", "\u{0948}\u{0902}"), // aS -> ◌ै◌ं
    Rule::new("S", "\u{0948}"), // S -> ◌ै
    Rule::new("a\u{00AA}", "\u{094D}\u{0930}\u{0902}"), // aª -> ◌्र◌ं
    Rule::new("\u{00AA}", "\u{094D}\u{0930}"), // ª -> ◌्र
    Rule::new("fa", "\u{0902}f"), // fa -> ◌ंf
    Rule::new("a", "\u{0902}"), // a -> ◌ं
    Rule::new("\u{00A1}", "\u{0901}"), // ¡ -> ◌ँ

    // Punctuation and symbols
    Rule::new("%", ":"), // % -> :
    Rule::new("W", "\u{0945}"), // W -> ◌ॅ
    Rule::new("\u{2022}", "\u{093D}"), // • -> ऽ
    Rule::new("\u{00B7}", "\u{093D}"), // · -> ऽ
    Rule::new("\u{2219}", "\u{093D}"), // ∙ -> ऽ
    Rule::new("~j", "\u{094D}\u{0930}"), // ~j -> ◌्र
    Rule::new("~", "\u{094D}"), // ~ -> ◌्
    Rule::new("\\", "?"), // \ -> ?
    Rule::new("+", "\u{093C}"), // + -> ◌़
    Rule::new("^", "\u{2018}"), // ^ -> ‘
    Rule::new("*", "\u{2019}"), // * -> ’
    Rule::new("\u{00DE}", "\u{201C}"), // Þ -> “
    Rule::new("\u{00DF}", "\u{201D}"), // ß -> ”
    Rule::new("(", ";"), // ( -> ;
    Rule::new("\u{00BC}", "("), // ¼ -> (
    Rule::new("\u{00BD}", ")"), // ½ -> )
    Rule::new("\u{00BF}", "{"), // ¿ -> {
    Rule::new("\u{00C0}", "}"), // À -> }
    Rule::new("\u{00BE}", "="), // ¾ -> =
    Rule::new("A", "\u{0964}"), // A -> ।
    Rule::new("-", "."), // - -> .
    Rule::new("&", "-"), // & -> -
    Rule::new("\u{03BC}", "-"), // μ -> -
    Rule::new("\u{0152}", "\u{0970}"), // Œ -> ॰
    Rule::new("]", ","), // ] -> ,
    Rule::new("@", "/"), // @ -> /
    Rule::new("\u{00AE}", "\u{0948}\u{0902}"), // ® -> ◌ै◌ं
];

#[cfg(test)]
mod tests {
    use super::*;

    mod validate {
        use super::*;

        #[test]
        fn test_krutidev_table() {
            assert_eq!(Ok(()), validate(KRUTIDEV_RULES));
        }

        #[test]
        fn test_pattern_lengths() {
            for rule in KRUTIDEV_RULES {
                let len = rule.pattern.chars().count();
                assert!((1..=4).contains(&len), "{:?}", rule);
                assert!(!rule.replacement.is_empty(), "{:?}", rule);
            }
        }

        #[test]
        fn test_empty_pattern() {
            let rules = [Rule::new("d", "\u{0915}"), Rule::new("", "x")];
            assert_eq!(
                Some(RuleError::EmptyPattern { index: 1 }),
                RuleTable::new(&rules).err()
            );
        }

        #[test]
        fn test_duplicate_pattern() {
            let rules = [
                Rule::new("&", "-"),
                Rule::new("d", "\u{0915}"),
                Rule::new("&", "\u{00B5}"),
            ];
            assert_eq!(
                Some(RuleError::DuplicatePattern {
                    first: 0,
                    second: 2
                }),
                RuleTable::new(&rules).err()
            );
        }

        #[test]
        fn test_shadowed_pattern() {
            let rules = [Rule::new("~", "\u{094D}"), Rule::new("~ ", "\u{094D} ")];
            assert_eq!(
                Some(RuleError::ShadowedPattern {
                    shorter: 0,
                    longer: 1
                }),
                RuleTable::new(&rules).err()
            );
        }

        #[test]
        fn test_longer_pattern_first() {
            let rules = [Rule::new("~ ", "\u{094D} "), Rule::new("~", "\u{094D}")];
            assert!(RuleTable::new(&rules).is_ok());
        }
    }

    mod substitute {
        use super::*;

        #[test]
        fn test_rule_order() {
            let rules = [Rule::new("Hk", "\u{092D}"), Rule::new("H", "\u{092D}\u{094D}")];
            let table = RuleTable::new(&rules).unwrap();

            assert_eq!("\u{092D}\u{092D}\u{094D}", table.substitute("HkH"));
        }

        #[test]
        fn test_later_rule_sees_earlier_output() {
            let rules = [Rule::new("ak", "k\u{0902}"), Rule::new("k", "\u{093E}")];
            let table = RuleTable::new(&rules).unwrap();

            assert_eq!("\u{093E}\u{0902}", table.substitute("ak"));
        }

        #[test]
        fn test_non_overlapping() {
            let rules = [Rule::new("aa", "a")];
            let table = RuleTable::new(&rules).unwrap();

            assert_eq!("aa", table.substitute("aaa"));
        }

        #[test]
        fn test_krutidev_consonant_prefix() {
            let table = RuleTable::krutidev();

            assert_eq!("\u{092D}\u{093E}\u{0930}\u{0924}", table.substitute("Hkkjr"));
        }

        #[test]
        fn test_pre_posed_marker_untouched() {
            let table = RuleTable::krutidev();

            assert_eq!("f\u{0915}", table.substitute("fd"));
        }

        #[test]
        fn test_unknown_passthrough() {
            let table = RuleTable::krutidev();

            assert_eq!("\u{00A2}1\u{0915}\n", table.substitute("\u{00A2}1d\n"));
        }
    }
}
