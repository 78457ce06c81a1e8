//! Integration tests for arabtr end-to-end transliteration

use arabtr::{
    diagnostics::check_text, post_process, transliterate, transliterate_lines,
    transliterate_with_diagnostics, transliterate_with_options, TranslitOptions,
};

// ============================================================================
// Definite Article
// ============================================================================

mod article {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_moon_letters() {
        assert_eq!(transliterate("الْقَمَرُ"), "al-qamaru");
        assert_eq!(transliterate("الْكِتَابُ"), "al-kitābu");
    }

    #[test]
    fn test_sun_letters() {
        assert_eq!(transliterate("الشَّمْسُ"), "ash-shamsu");
        assert_eq!(transliterate("الرَّحْمَنُ"), "ar-raḥmanu");
        assert_eq!(transliterate("الصَّلَاةُ"), "aṣ-ṣalātu");
    }

    #[test]
    fn test_vocalized_article() {
        assert_eq!(transliterate("اَلشَّمْسُ"), "ash-shamsu");
        assert_eq!(transliterate("اَلْقَمَرُ"), "al-qamaru");
    }

    #[test]
    fn test_mid_phrase_article_drops_vowel() {
        assert_eq!(transliterate("فِي الْبَيْتِ"), "fī l-bayti");
        assert_eq!(
            transliterate("بِسْمِ اللهِ الرَّحْمَنِ الرَّحِيمِ"),
            "bismi l-lāhi r-raḥmani r-raḥīmi"
        );
    }

    #[test]
    fn test_attached_preposition_fuses() {
        assert_eq!(transliterate("بِالشَّمْسِ"), "bishshamsi");
    }

    #[test]
    fn test_article_after_tanwin() {
        assert_eq!(
            transliterate("عَنَّا مُحَمَّدًا الْمُخْتَارَ فِي الْقِدَمِ"),
            "ʿannā muḥammadaⁿ il-mukhtāra fī l-qidami"
        );
    }
}

// ============================================================================
// Divine Name
// ============================================================================

mod divine_name {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_phrase_initial() {
        assert_eq!(transliterate("اللهُ"), "al-lāhu");
        assert_eq!(transliterate("اَللهُ"), "al-lāhu");
        assert_eq!(transliterate("قَالَ. اللهُ"), "qāla. al-lāhu");
    }

    #[test]
    fn test_mid_phrase() {
        assert_eq!(transliterate("بِسْمِ اللهِ"), "bismi l-lāhi");
        assert_eq!(transliterate("قَالَ اللهُ"), "qāla l-lāhu");
    }

    #[test]
    fn test_prefixed_forms() {
        assert_eq!(transliterate("بِاللَّهِ"), "billāhi");
        assert_eq!(transliterate("لِلَّهِ"), "lillāhi");
        assert_eq!(transliterate("فَاللَّهُ"), "fallāhu");
        assert_eq!(transliterate("وَاللهِ"), "wa l-lāhi");
    }

    #[test]
    fn test_prefixed_forms_in_sequence() {
        assert_eq!(
            transliterate("وَاللهِ، بِاللَّهِ، لِلَّهِ، فَاللَّهُ"),
            "wa l-lāhi, billāhi, lillāhi, fallāhu"
        );
    }

    #[test]
    fn test_common_phrases() {
        assert_eq!(
            transliterate("الْحَمْدُ لِلَّهِ، إِنْ شَاءَ اللَّهُ، سُبْحَانَ اللَّهِ"),
            "al-ḥamdu lillāhi, in shā'a l-lāhu, subḥāna l-lāhi"
        );
        assert_eq!(
            transliterate("اَلْحَمْدُ لِلَّهِ رَبِّ الْعَالَمِينَ"),
            "al-ḥamdu lillāhi rabbi l-ʿālamīna"
        );
    }
}

// ============================================================================
// Gemination
// ============================================================================

mod gemination {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_doubled_consonant() {
        assert_eq!(transliterate("رَبِّ"), "rabbi");
        assert_eq!(transliterate("مُحَمَّدٌ"), "muḥammaduⁿ");
        assert_eq!(transliterate("السَّلَّامُ عَلَيْكُمْ"), "as-sallāmu ʿalaykum");
    }

    #[test]
    fn test_doubled_glides() {
        assert_eq!(transliterate("نَبِيُّ"), "nabiyyu");
        assert_eq!(transliterate("عَدُوُّ"), "ʿaduwwu");
        assert_eq!(transliterate("أَيَّامٌ"), "ayyāmuⁿ");
    }

    #[test]
    fn test_shadda_after_tanwin() {
        // Canonical Unicode order puts tanwin before shadda
        assert_eq!(transliterate("\u{062D}\u{064E}\u{0642}\u{064C}\u{0651}"), "ḥaqquⁿ");
        assert_eq!(transliterate("\u{062D}\u{064E}\u{0642}\u{0651}\u{064C}"), "ḥaqquⁿ");
    }

    #[test]
    fn test_vowel_typed_before_shadda() {
        let swapped = "رَبَّ".replace("\u{064E}\u{0651}", "\u{0651}\u{064E}");
        let reordered = "رَبَّ".replace("\u{0651}\u{064E}", "\u{064E}\u{0651}");
        assert_eq!(transliterate(&swapped), transliterate(&reordered));
    }
}

// ============================================================================
// Long Vowels and Diphthongs
// ============================================================================

mod long_vowels {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_long_a() {
        assert_eq!(transliterate("قَالَ"), "qāla");
        assert_eq!(transliterate("كِتَابٌ"), "kitābuⁿ");
        assert_eq!(transliterate("هَذَا"), "hadhā");
    }

    #[test]
    fn test_alif_maksura() {
        assert_eq!(transliterate("مُوسَى"), "mūsā");
        assert_eq!(transliterate("عَلَى"), "ʿalā");
        assert_eq!(transliterate("تَعَالَى"), "taʿālā");
    }

    #[test]
    fn test_long_i_and_u() {
        assert_eq!(transliterate("كَبِيرٌ"), "kabīruⁿ");
        assert_eq!(transliterate("نُورٌ"), "nūruⁿ");
    }

    #[test]
    fn test_diphthongs() {
        assert_eq!(transliterate("بَيْتٌ"), "baytuⁿ");
        assert_eq!(transliterate("يَوْمٌ"), "yawmuⁿ");
    }

    #[test]
    fn test_alif_madda() {
        assert_eq!(transliterate("قُرْآنٌ"), "qur'ānuⁿ");
    }

    #[test]
    fn test_hamza_seats() {
        assert_eq!(transliterate("سَأَلَ"), "sa'ala");
        assert_eq!(transliterate("مَسْؤُولٌ"), "mas'ūluⁿ");
    }
}

// ============================================================================
// Punctuation and Non-Arabic Input
// ============================================================================

mod punctuation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_arabic_punctuation_is_latinized() {
        assert_eq!(
            transliterate("هَلْ تَعْلَمْ؟ نَعَمْ، أَعْلَمُ!"),
            "hal taʿlam? naʿam, aʿlamu!"
        );
    }

    #[test]
    fn test_quranic_brackets() {
        assert_eq!(transliterate("﴿وَاللهُ﴾"), "«wa l-lāhu»");
    }

    #[test]
    fn test_digits_pass_through() {
        assert_eq!(
            transliterate("الصَّفْحَةُ ١٢٣ - الْفَصْلُ 456"),
            "aṣ-ṣafḥatu ١٢٣ - l-faṣlu 456"
        );
        assert_eq!(transliterate("[يُونُسُ: ٢٥]"), "[yūnusu: ٢٥]");
    }

    #[test]
    fn test_ligature_passes_through() {
        assert_eq!(transliterate("ﷺ"), "ﷺ");
    }

    #[test]
    fn test_verse() {
        assert_eq!(
            transliterate(
                "قَالَ اللهُ تَعَالَى: ﴿وَاللهُ يَدْعُو إِلَى دَارِ السَّلَامِ﴾ [يونس: ٢٥]"
            ),
            "qāla l-lāhu taʿālā: «wa l-lāhu yadʿū ilā dāri s-salāmi» [ywns: ٢٥]"
        );
    }

    #[test]
    fn test_hyphen_before_vowel_is_dropped() {
        assert_eq!(transliterate("بَ-اُمٌّ"), "baummuⁿ");
        assert_eq!(transliterate("بَ-كَ"), "ba-ka");
    }

    #[test]
    fn test_unknown_characters_become_space() {
        assert_eq!(transliterate("x"), "");
        assert_eq!(transliterate("abc بَ"), "ba");
    }
}

// ============================================================================
// Properties
// ============================================================================

mod properties {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLES: &[&str] = &[
        "بِسْمِ اللهِ الرَّحْمَنِ الرَّحِيمِ",
        "اَلْحَمْدُ لِلَّهِ رَبِّ الْعَالَمِينَ",
        "وَاللهِ، بِاللَّهِ، لِلَّهِ، فَاللَّهُ",
        "هَلْ تَعْلَمْ؟ نَعَمْ، أَعْلَمُ!",
        "عَنَّا مُحَمَّدًا الْمُخْتَارَ فِي الْقِدَمِ",
        "قَالَ اللهُ تَعَالَى: ﴿وَاللهُ يَدْعُو إِلَى دَارِ السَّلَامِ﴾",
    ];

    #[test]
    fn test_total_on_odd_input() {
        // Must never panic, whatever the input
        let odd = [
            "\u{0651}",
            "\u{064E}\u{0651}\u{0652}",
            "ال",
            "ا",
            "ل",
            "الل",
            "اللّ",
            "ٱ",
            "ًّ",
            "  \n  ",
            "\u{FEFF}بَ",
            "كتب",
            "😀 بَ",
        ];
        for input in odd {
            let _ = transliterate(input);
            let _ = transliterate_with_options(input, &TranslitOptions::raw());
            let _ = transliterate_lines(input);
            let _ = check_text(input);
        }
    }

    #[test]
    fn test_deterministic() {
        for s in SAMPLES {
            assert_eq!(transliterate(s), transliterate(s));
        }
    }

    #[test]
    fn test_post_process_idempotent() {
        for s in SAMPLES {
            let once = transliterate(s);
            assert_eq!(post_process(&once), once);
        }
    }

    #[test]
    fn test_post_process_idempotent_with_extra_spaces() {
        for s in ["قَالَ.  اللهُ", "لِ  اللهِ", "نَعَمْ،   اللهُ"] {
            let once = transliterate(s);
            assert_eq!(post_process(&once), once);
        }
        assert_eq!(transliterate("قَالَ.  اللهُ"), "qāla. al-lāhu");
        assert_eq!(transliterate("لِ  اللهِ"), "lillāhi");
    }

    #[test]
    fn test_no_double_spaces() {
        for s in SAMPLES {
            let out = transliterate(s);
            assert!(!out.contains("  "), "double space in {:?}", out);
            assert_eq!(out.trim(), out);
        }
    }

    #[test]
    fn test_lines_preserve_count() {
        let text = SAMPLES.join("\n");
        let out = transliterate_lines(&text);
        assert_eq!(out.split('\n').count(), SAMPLES.len());
        for (line, sample) in out.split('\n').zip(SAMPLES) {
            assert_eq!(line, transliterate(sample));
        }
    }

    #[test]
    fn test_clean_samples_have_no_warnings() {
        for s in SAMPLES {
            let result = transliterate_with_diagnostics(s);
            assert!(
                !result.has_warnings(),
                "{:?} produced {:?}",
                s,
                result.warnings
            );
        }
    }
}
