//! Per-language instructions appended to chat system prompts.

/// Exact-match table keyed by locale tag.
pub const LANGUAGE_PROMPTS: [(&str, &str); 10] = [
    (
        "hi-IN",
        "\n\nकृपया हिंदी में उत्तर दें। सरल और स्पष्ट भाषा का प्रयोग करें।",
    ),
    (
        "bn-IN",
        "\n\nঅনুগ্রহ করে বাংলায় উত্তর দিন। সহজ এবং স্পষ্ট ভাষা ব্যবহার করুন।",
    ),
    (
        "mr-IN",
        "\n\nकृपया मराठीत उत्तर द्या. सोपी आणि स्पष्ट भाषा वापरा.",
    ),
    (
        "ta-IN",
        "\n\nதமிழில் பதிலளிக்கவும். எளிய மற்றும் தெளிவான மொழியைப் பயன்படுத்தவும்.",
    ),
    (
        "te-IN",
        "\n\nదయచేసి తెలుగులో జవాబు ఇవ్వండి. సరళమైన మరియు స్పష్టమైన భాషను ఉపయోగించండి.",
    ),
    (
        "gu-IN",
        "\n\nકૃપા કરીને ગુજરાતીમાં જવાબ આપો. સરળ અને સ્પષ્ટ ભાષા નો ઉપયોગ કરો.",
    ),
    (
        "kn-IN",
        "\n\nದಯವಿಟ್ಟು ಕನ್ನಡದಲ್ಲಿ ಉತ್ತರಿಸಿ. ಸರಳ ಮತ್ತು ಸ್ಪಷ್ಟ ಭಾಷೆಯನ್ನು ಬಳಸಿ.",
    ),
    (
        "ml-IN",
        "\n\nദയവായി മലയാളത്തിൽ മറുപടി നൽകുക. ലളിതവും വ്യക്തവുമായ ഭാഷ ഉപയോഗിക്കുക.",
    ),
    (
        "pa-IN",
        "\n\nਕਿਰਪਾ ਕਰਕੇ ਪੰਜਾਬੀ ਵਿੱਚ ਜਵਾਬ ਦਿਓ। ਸਧਾਰਨ ਅਤੇ ਸਪਸ਼ਟ ਭਾਸ਼ਾ ਦੀ ਵਰਤੋਂ ਕਰੋ।",
    ),
    (
        "ur-IN",
        "\n\nبراہ کرم اردو میں جواب دیں۔ سادہ اور واضح زبان استعمال کریں۔",
    ),
];

pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Instruction for `language_tag`. Matching is exact: `"hi-IN"` hits the
/// table, `"hi"` gets the generic template.
pub fn language_instruction(language_tag: &str) -> String {
    LANGUAGE_PROMPTS
        .iter()
        .find(|(tag, _)| *tag == language_tag)
        .map(|(_, instruction)| instruction.to_string())
        .unwrap_or_else(|| {
            format!(
                "\n\nPlease respond in {} language. Use simple and clear language.",
                language_tag
            )
        })
}

pub fn is_english(language_tag: &str) -> bool {
    language_tag
        .get(..2)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("en"))
}
