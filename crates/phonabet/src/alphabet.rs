//! The sound alphabet catalogue.
//!
//! Static domain data: every sound the constructed language distinguishes,
//! with example words, IPA notation, and the quick transcription used when
//! spelling words out loud. `{...}` spans in the example text mark the
//! letters that carry the sound.

use phonabet_render::TableSpec;

/// One sound of the alphabet.
pub struct Sound {
    pub kind: &'static str,
    pub name: &'static str,
    pub examples: &'static str,
    pub description: &'static str,
    pub ipa: &'static str,
    pub quick_transcription: &'static str,
}

/// The full catalogue, in presentation order.
pub fn sounds() -> &'static [Sound] {
    &[
        Sound {
            kind: "compressioned vowel",
            name: "compression",
            examples: "{'} in didn't\n{'} in can't\ndifference when diff{'}rence\nseveral when sev{'}ral\ntemperature when temp{'}rature",
            description: " ",
            ipa: "(none or ə̆)",
            quick_transcription: "'",
        },
        Sound {
            kind: "central vowel",
            name: "Around-around",
            examples: "{a} in about\n{a} in Tina\n1st {a} in ahead",
            description: "Mid central vowel",
            ipa: "ə",
            quick_transcription: "uh",
        },
        Sound {
            kind: "near-open vowel",
            name: "Cat-cat",
            examples: "{a} in cat\n{a} in hand\n{a} in trap",
            description: "Near-open front unrounded vowel",
            ipa: "æ",
            quick_transcription: "a",
        },
        Sound {
            kind: "open-mid vowel",
            name: "Bed-bed",
            examples: "{e} in bed\n{ea} in head\n{e} in said when sed",
            description: "Open-mid front unrounded vowel",
            ipa: "ɛ",
            quick_transcription: "eh",
        },
        Sound {
            kind: "close vowel",
            name: "See-see",
            examples: "{ee} in see\n{ea} in sea\n{ie} in believe",
            description: "Close front unrounded vowel",
            ipa: "i",
            quick_transcription: "ee",
        },
        Sound {
            kind: "near-close vowel",
            name: "Sit-sit",
            examples: "{i} in sit\n{i} in bit\n{y} in myth",
            description: "Near-close near-front unrounded vowel",
            ipa: "ɪ",
            quick_transcription: "i",
        },
        Sound {
            kind: "close vowel",
            name: "Moon-moon",
            examples: "{oo} in moon\n{u} in flute\n{ew} in grew",
            description: "Close back rounded vowel",
            ipa: "u",
            quick_transcription: "oo",
        },
        Sound {
            kind: "open vowel",
            name: "Father-father",
            examples: "{a} in father\n{o} in hot\n{a} in calm",
            description: "Open back unrounded vowel",
            ipa: "ɑ",
            quick_transcription: "ah",
        },
        Sound {
            kind: "plosive consonant",
            name: "Pop-pop",
            examples: "{p} in pop\n{p} in spin\n{pp} in apple",
            description: "Voiceless bilabial plosive",
            ipa: "p",
            quick_transcription: "p",
        },
        Sound {
            kind: "plosive consonant",
            name: "Tot-tot",
            examples: "{t} in tot\n{t} in stop\n{tt} in butter",
            description: "Voiceless alveolar plosive",
            ipa: "t",
            quick_transcription: "t",
        },
        Sound {
            kind: "nasal consonant",
            name: "Mum-mum",
            examples: "{m} in mum\n{m} in small\n{mm} in hammer",
            description: "Voiced bilabial nasal",
            ipa: "m",
            quick_transcription: "m",
        },
        Sound {
            kind: "fricative consonant",
            name: "Ship-ship",
            examples: "{sh} in ship\n{ti} in nation\n{ch} in machine",
            description: "Voiceless postalveolar fricative",
            ipa: "ʃ",
            quick_transcription: "sh",
        },
        Sound {
            kind: "fricative consonant",
            name: "This-this",
            examples: "{th} in this\n{th} in mother\n{th} in breathe",
            description: "Voiced dental fricative",
            ipa: "ð",
            quick_transcription: "dh",
        },
        Sound {
            kind: "approximant consonant",
            name: "Yes-yes",
            examples: "{y} in yes\n{y} in yellow\n{i} in onion",
            description: "Voiced palatal approximant",
            ipa: "j",
            quick_transcription: "y",
        },
    ]
}

/// The catalogue as a renderable table.
///
/// The name column is centered, example text uses `{...}` marks, and the
/// IPA column is highlighted.
pub fn table_spec() -> TableSpec {
    let mut builder = TableSpec::builder()
        .header([
            "Type",
            "Name",
            "Examples",
            "Description",
            "IPA",
            "Quick transcription",
        ])
        .center_column(1)
        .mark_column(2)
        .highlight_column(4);

    for sound in sounds() {
        builder = builder.row([
            sound.kind,
            sound.name,
            sound.examples,
            sound.description,
            sound.ipa,
            sound.quick_transcription,
        ]);
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sound_has_marked_examples() {
        for sound in sounds() {
            assert!(
                sound.examples.contains('{') && sound.examples.contains('}'),
                "{} has no marked letters",
                sound.name
            );
            assert!(!sound.name.is_empty());
            assert!(!sound.ipa.is_empty());
        }
    }

    #[test]
    fn spec_matches_catalogue_shape() {
        let spec = table_spec();
        assert_eq!(spec.num_columns(), 6);
        assert_eq!(spec.data.len(), sounds().len());
        assert!(spec.marked_columns.contains(&2));
        assert!(spec.highlighted_columns.contains(&4));
        assert!(spec.center_columns.contains(&1));
    }
}
