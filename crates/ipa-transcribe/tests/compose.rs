//! Phrase composition across languages with an in-memory fetcher.

use std::sync::Arc;

use ipa_transcribe::{
    split_phrase, CompositionOptions, FailureStrategy, Language, StaticFetcher, Transcriber,
};

// ─────────────────────── fixtures ───────────────────────

const DOG: &str = "\
==English==
===Pronunciation===
* {{a|RP}} {{IPA|en|/dɒɡ/}}
* {{a|GA}} {{IPA|en|/dɔɡ/|/dɑɡ/}}
";

const HOT: &str = "\
==English==
* {{a|RP}} {{IPA|en|/hɒt/}}
* {{a|GA}} {{IPA|en|/hɑt/}}
";

const CHEVAL: &str = r#"
<h2><span class="sectionlangue" id="fr">Français</span></h2>
<h3>Nom commun</h3>
<p><b>cheval</b> <span title="Prononciation API">\ʃə.val\</span></p>
<ul>
  <li><span title="Prononciation API">\ʃfal\</span></li>
  <li><span title="Prononciation API">\ʃval\</span></li>
</ul>
"#;

const LAND: &str = ":{{IPA}} {{Lautschrift|lant}}, {{Pl.}} {{Lautschrift|ˈlɛndɐ}}";

const KOT: &str = r#"<p><span class="IPA">[kot]</span></p>"#;

const KAT: &str = r#"<p><span class="IPAtekst">/kɑt/</span></p>"#;

fn transcriber() -> Transcriber {
    let british = Language::British.source();
    let fetcher = StaticFetcher::new()
        .with_page(british, "dog", DOG)
        .with_page(british, "hot", HOT)
        .with_page(Language::French.source(), "cheval", CHEVAL)
        .with_page(Language::German.source(), "Land", LAND)
        .with_page(Language::Russian.source(), "кот", KOT)
        .with_page(Language::Dutch.source(), "kat", KAT);
    Transcriber::new(Arc::new(fetcher))
}

fn with(strategy: FailureStrategy) -> CompositionOptions {
    CompositionOptions {
        failure_strategy: strategy,
        ..CompositionOptions::default()
    }
}

// ─────────────────────── tests ───────────────────────

#[tokio::test]
async fn test_english_accent_follows_language() {
    let t = transcriber();
    let options = CompositionOptions::default();
    assert_eq!(t.compose(&["dog"], Language::British, &options).await, "dɒɡ");
    assert_eq!(t.compose(&["dog"], Language::American, &options).await, "dɔɡ");
}

#[tokio::test]
async fn test_all_transcriptions_for_single_word() {
    let t = transcriber();
    let options = CompositionOptions {
        all_transcriptions: true,
        ..CompositionOptions::default()
    };
    assert_eq!(
        t.compose(&["cheval"], Language::French, &options).await,
        "ʃəval, ʃfal, ʃval"
    );
    assert_eq!(
        t.compose(&["dog"], Language::American, &options).await,
        "dɔɡ, dɑɡ"
    );
}

#[tokio::test]
async fn test_phrase_joins_first_candidates() {
    let t = transcriber();
    let options = CompositionOptions {
        all_transcriptions: true,
        ..CompositionOptions::default()
    };
    assert_eq!(
        t.compose(&["hot", "dog"], Language::British, &options).await,
        "hɒt dɒɡ"
    );
}

#[tokio::test]
async fn test_failure_strategies_with_one_unknown_word() {
    let t = transcriber();
    let phrase = ["nosuchword", "dog"];
    let cases = [
        (FailureStrategy::Show, "~???~ dɒɡ"),
        (FailureStrategy::Partial, "dɒɡ"),
        (FailureStrategy::Whole, "~???~"),
        (FailureStrategy::Hide, ""),
    ];
    for (strategy, expected) in cases {
        assert_eq!(
            t.compose(&phrase, Language::British, &with(strategy)).await,
            expected,
            "strategy {strategy}"
        );
    }
}

#[tokio::test]
async fn test_single_unknown_word() {
    let t = transcriber();
    assert_eq!(
        t.compose(&["boulangery"], Language::French, &with(FailureStrategy::Show)).await,
        "~???~"
    );
    assert_eq!(
        t.compose(&["boulangery"], Language::French, &with(FailureStrategy::Hide)).await,
        ""
    );
}

#[tokio::test]
async fn test_empty_phrase() {
    let t = transcriber();
    let empty: [&str; 0] = [];
    assert_eq!(
        t.compose(&empty, Language::Polish, &with(FailureStrategy::Show)).await,
        ""
    );
}

#[tokio::test]
async fn test_word_text_is_used_as_given() {
    let t = transcriber();
    let options = CompositionOptions::default();
    assert_eq!(t.compose(&["Land"], Language::German, &options).await, "lant");
    assert!(t.candidates("land", Language::German, true).await.is_empty());
}

#[tokio::test]
async fn test_html_languages() {
    let t = transcriber();
    assert_eq!(t.candidates("кот", Language::Russian, true).await, vec!["kot"]);
    assert_eq!(t.candidates("kat", Language::Dutch, true).await, vec!["kɑt"]);
}

#[tokio::test]
async fn test_editor_field_to_transcription() {
    let t = transcriber();
    let words = split_phrase("<div>Hot&nbsp;<b>dog</b>!</div>", true);
    assert_eq!(
        t.compose(words.as_slice(), Language::British, &CompositionOptions::default()).await,
        "hɒt dɒɡ"
    );
}
