//! Localized tip catalog
//!
//! Fixed mapping: topic -> canonical language name -> candidate tips.
//! Every topic covers all five supported languages, and
//! `general`/`english` always exists as the ultimate fallback.
//! Lookups key on the output of `normalize_language`, so unsupported
//! values simply miss and callers fall back to English.

use crate::Topic;

/// Ultimate fallback candidates: always the English `general` tips
pub const FALLBACK_TIPS: &[&str] = &[
    "Keep learning about financial management.",
    "Track your income and expenses regularly.",
];

/// Look up the candidate tips for a topic/language pair
///
/// Returns `None` on a catalog miss (unsupported language name);
/// callers retry with `"english"`.
pub fn tips_for(topic: Topic, language: &str) -> Option<&'static [&'static str]> {
    let tips: &'static [&'static str] = match (topic, language) {
        (Topic::Savings, "english") => &[
            "Try to save at least 10% of your income each month.",
            "Keep an emergency fund for unexpected expenses.",
        ],
        (Topic::Savings, "yoruba") => &[
            "Gbiyanju lati fi o kere ju 10% ti owo-wiwọle rẹ pamọ lododun.",
            "Ṣe eto ajeseku pajawiri fun awọn inawo airotẹlẹ.",
        ],
        (Topic::Savings, "hausa") => &[
            "Yi ƙoƙarin ajiye akalla 10% na kudin shiga kowane wata.",
            "Samu asusun gaggawa don kashe kuɗi na ba zato ba tsammani.",
        ],
        (Topic::Savings, "swahili") => &[
            "Jaribu kuweka angalau 10% ya mapato yako kila mwezi.",
            "Hifadhi mfuko wa dharura kwa matumizi yasiyotegemewa.",
        ],
        (Topic::Savings, "twi") => &[
            "Sɔ hwɛ sɛ wode w’akɔmɔde 10% si akyɛde biara mu.",
            "Fa sika akyɛde bɔ ho ban wɔ nsɛm a ɛda hɔ no.",
        ],

        (Topic::Credit, "english") => &[
            "Always repay loans on time to maintain a good credit record.",
            "Check the interest rate before taking any loan.",
        ],
        (Topic::Credit, "yoruba") => &[
            "Ma awọn awin pada ni akoko lati ni igbasilẹ kirẹditi to dara.",
            "Ṣayẹwo oṣuwọn anfani ṣaaju gbigba awin kankan.",
        ],
        (Topic::Credit, "hausa") => &[
            "Koyaushe biya bashi akan lokaci don kiyaye tarihin bashi mai kyau.",
            "Duba ribar kudin ruwa kafin karɓar kowane bashi.",
        ],
        (Topic::Credit, "swahili") => &[
            "Lipa mikopo kwa wakati ili kudumisha rekodi nzuri ya mikopo.",
            "Angalia kiwango cha riba kabla ya kuchukua mkopo wowote.",
        ],
        (Topic::Credit, "twi") => &[
            "Tua ka wɔ bere mu sɛnea ɛbɛyɛ a wo credit record bɛyɛ papa.",
            "Hwɛ interest rate ansa na wopɛ sɛ wopaw no.",
        ],

        (Topic::Investment, "english") => &[
            "Diversify your investments to reduce risk.",
            "Start small and learn as you invest.",
        ],
        (Topic::Investment, "yoruba") => &[
            "Ṣe oniruuru awọn idoko-owo rẹ lati dinku ewu.",
            "Bẹrẹ kekere ki o kọ ẹkọ bi o ṣe n ṣe idoko-owo.",
        ],
        (Topic::Investment, "hausa") => &[
            "Yi bambanta zuba jari don rage haɗari.",
            "Fara da ƙanana ka koya yayin da kake saka jari.",
        ],
        (Topic::Investment, "swahili") => &[
            "Tenga uwekezaji wako ili kupunguza hatari.",
            "Anza kidogo na jifunze unapowekeza.",
        ],
        (Topic::Investment, "twi") => &[
            "Bɔ w’adesua akyirikyiri mu de sɛe risk no.",
            "Fi ase kakra na sua sɛnea wode sika gu so.",
        ],

        (Topic::DigitalFinance, "english") => &[
            "Use strong passwords for your mobile banking apps.",
            "Always verify transactions before confirming.",
        ],
        (Topic::DigitalFinance, "yoruba") => &[
            "Lo awọn ọrọigbaniwọle to lagbara fun awọn ohun elo banki alagbeka rẹ.",
            "Ṣayẹwo gbogbo awọn iṣowo ṣaaju gbigba wọn.",
        ],
        (Topic::DigitalFinance, "hausa") => &[
            "Yi amfani da kalmomin sirri masu ƙarfi don aikace-aikacen banki na wayar hannu.",
            "Koyaushe tabbatar da ma'amaloli kafin tabbatarwa.",
        ],
        (Topic::DigitalFinance, "swahili") => &[
            "Tumia nywila imara kwa programu zako za benki za simu.",
            "Daima hakikisha miamala kabla ya kuthibitisha.",
        ],
        (Topic::DigitalFinance, "twi") => &[
            "Fa password den wɔ mobile banking apps mu.",
            "Hwɛ transactions no ansa na wopɛ sɛ wopaw no.",
        ],

        (Topic::General, "english") => FALLBACK_TIPS,
        (Topic::General, "yoruba") => &[
            "Tẹsiwaju lati kọ ẹkọ nipa iṣakoso owo.",
            "Tẹle owo-wiwọle ati awọn inawo rẹ nigbagbogbo.",
        ],
        (Topic::General, "hausa") => &[
            "Ci gaba da koyon sarrafa kudi.",
            "Bi dididdiga kudin shiga da fita akai-akai.",
        ],
        (Topic::General, "swahili") => &[
            "Endelea kujifunza kuhusu usimamizi wa fedha.",
            "Fuatilia mapato na matumizi yako mara kwa mara.",
        ],
        (Topic::General, "twi") => &[
            "Kɔ so sua financial management.",
            "Di w’akɔmɔde ne nsesa ho adwene daa.",
        ],

        _ => return None,
    };
    Some(tips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use farmwise_core::Language;

    #[test]
    fn test_every_topic_covers_every_language() {
        for &topic in Topic::all() {
            for &language in Language::all() {
                let tips = tips_for(topic, language.canonical_name());
                assert!(
                    tips.is_some(),
                    "missing catalog entry for {topic}/{language}"
                );
                let tips = tips.unwrap();
                assert!(!tips.is_empty());
                assert!(tips.iter().all(|t| !t.is_empty()));
            }
        }
    }

    #[test]
    fn test_unsupported_language_misses() {
        assert!(tips_for(Topic::Savings, "fr").is_none());
        assert!(tips_for(Topic::Credit, "french").is_none());
        assert!(tips_for(Topic::General, "unknown").is_none());
    }

    #[test]
    fn test_general_english_is_fallback() {
        assert_eq!(tips_for(Topic::General, "english").unwrap(), FALLBACK_TIPS);
        assert!(!FALLBACK_TIPS.is_empty());
    }

    #[test]
    fn test_two_candidates_per_pair() {
        for &topic in Topic::all() {
            for &language in Language::all() {
                assert_eq!(tips_for(topic, language.canonical_name()).unwrap().len(), 2);
            }
        }
    }
}
