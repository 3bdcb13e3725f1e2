//! Built-in phrase packs. Read-only; custom phrases join them as a fourth pack.

use crate::models::{Pack, PackKind, Phrase};

#[derive(Debug, Clone, Copy)]
pub struct CatalogPhrase {
    pub id: &'static str,
    pub name: &'static str,
    pub script: &'static str,
    pub gloss: &'static str,
    pub default_target: u32,
}

impl CatalogPhrase {
    pub fn to_phrase(&self) -> Phrase {
        Phrase {
            id: self.id.to_string(),
            name: self.name.to_string(),
            script: self.script.to_string(),
            gloss: self.gloss.to_string(),
            default_target: self.default_target,
        }
    }
}

pub const COMMON: &[CatalogPhrase] = &[
    CatalogPhrase {
        id: "subhanallah",
        name: "SubhanAllah",
        script: "سُبْحَانَ ٱللَّٰهِ",
        gloss: "Glory be to Allah",
        default_target: 33,
    },
    CatalogPhrase {
        id: "alhamdulillah",
        name: "Alhamdulillah",
        script: "ٱلْحَمْدُ لِلَّٰهِ",
        gloss: "All praise is due to Allah",
        default_target: 33,
    },
    CatalogPhrase {
        id: "allahuakbar",
        name: "Allahu Akbar",
        script: "ٱللَّٰهُ أَكْبَرُ",
        gloss: "Allah is the Greatest",
        default_target: 34,
    },
    CatalogPhrase {
        id: "lailahaillallah",
        name: "La ilaha illallah",
        script: "لَا إِلَٰهَ إِلَّا ٱللَّٰهُ",
        gloss: "There is no god but Allah",
        default_target: 100,
    },
    CatalogPhrase {
        id: "astaghfirullah",
        name: "Astaghfirullah",
        script: "أَسْتَغْفِرُ ٱللَّٰهَ",
        gloss: "I seek forgiveness from Allah",
        default_target: 100,
    },
];

pub const DUAS: &[CatalogPhrase] = &[
    CatalogPhrase {
        id: "dua-jannah",
        name: "Dua for Jannah",
        script: "رَبَّنَا آتِنَا فِي الدُّنْيَا حَسَنَةً وَفِي الْآخِرَةِ حَسَنَةً",
        gloss: "Our Lord, give us good in this world and good in the Hereafter",
        default_target: 7,
    },
    CatalogPhrase {
        id: "dua-forgiveness",
        name: "Dua for Forgiveness",
        script: "رَبِّ اغْفِرْ لِي وَارْحَمْنِي",
        gloss: "My Lord, forgive me and have mercy upon me",
        default_target: 10,
    },
    CatalogPhrase {
        id: "dua-guidance",
        name: "Dua for Guidance",
        script: "رَبَّنَا لَا تُزِغْ قُلُوبَنَا بَعْدَ إِذْ هَدَيْتَنَا",
        gloss: "Our Lord, let not our hearts deviate after You have guided us",
        default_target: 7,
    },
    CatalogPhrase {
        id: "dua-patience",
        name: "Dua for Patience",
        script: "رَبَّنَا أَفْرِغْ عَلَيْنَا صَبْرًا وَتَوَفَّنَا مُسْلِمِينَ",
        gloss: "Our Lord, pour upon us patience and let us die as Muslims",
        default_target: 7,
    },
    CatalogPhrase {
        id: "dua-protection",
        name: "Dua for Protection",
        script: "أَعُوذُ بِاللَّٰهِ مِنَ الشَّيْطَانِ الرَّجِيمِ",
        gloss: "I seek refuge in Allah from Satan, the expelled",
        default_target: 3,
    },
    CatalogPhrase {
        id: "dua-knowledge",
        name: "Dua for Knowledge",
        script: "رَبِّ زِدْنِي عِلْمًا",
        gloss: "My Lord, increase me in knowledge",
        default_target: 10,
    },
];

pub const DAROODS: &[CatalogPhrase] = &[
    CatalogPhrase {
        id: "darood-ibrahim",
        name: "Darood Ibrahim",
        script: "اللَّهُمَّ صَلِّ عَلَى مُحَمَّدٍ وَعَلَى آلِ مُحَمَّدٍ",
        gloss: "O Allah, send prayers upon Muhammad and the family of Muhammad",
        default_target: 10,
    },
    CatalogPhrase {
        id: "darood-simple",
        name: "Simple Darood",
        script: "صَلَّى اللَّٰهُ عَلَيْهِ وَسَلَّمَ",
        gloss: "May Allah honor him and grant him peace",
        default_target: 100,
    },
    CatalogPhrase {
        id: "darood-complete",
        name: "Complete Darood Ibrahim",
        script: "اللَّهُمَّ صَلِّ عَلَى مُحَمَّدٍ وَعَلَى آلِ مُحَمَّدٍ كَمَا صَلَّيْتَ عَلَى إِبْرَاهِيمَ وَعَلَى آلِ إِبْرَاهِيمَ إِنَّكَ حَمِيدٌ مَجِيدٌ",
        gloss: "O Allah, send prayers upon Muhammad and his family as You sent prayers upon Ibrahim",
        default_target: 11,
    },
    CatalogPhrase {
        id: "darood-tasleem",
        name: "Darood with Tasleem",
        script: "اللَّهُمَّ صَلِّ وَسَلِّمْ عَلَى نَبِيِّنَا مُحَمَّدٍ",
        gloss: "O Allah, send prayers and peace upon our Prophet Muhammad",
        default_target: 10,
    },
    CatalogPhrase {
        id: "darood-lakhs",
        name: "Darood Lakhs",
        script: "اللَّهُمَّ صَلِّ عَلَى سَيِّدِنَا مُحَمَّدٍ",
        gloss: "O Allah, send blessings upon our Master Muhammad",
        default_target: 1000,
    },
];

fn static_pack(
    id: PackKind,
    name: &'static str,
    description: &'static str,
    items: &[CatalogPhrase],
) -> Pack {
    Pack {
        id,
        name,
        description,
        items: items.iter().map(CatalogPhrase::to_phrase).collect(),
    }
}

pub fn packs(custom: &[Phrase]) -> Vec<Pack> {
    vec![
        static_pack(PackKind::Common, "Common Zikr", "Daily remembrance phrases", COMMON),
        static_pack(PackKind::Duas, "Duas", "Supplications from Quran & Hadith", DUAS),
        static_pack(
            PackKind::Daroods,
            "Daroods",
            "Blessings upon Prophet Muhammad ﷺ",
            DAROODS,
        ),
        Pack {
            id: PackKind::Custom,
            name: "Custom",
            description: "Your personal Zikr collection",
            items: custom.to_vec(),
        },
    ]
}

/// The phrase a fresh session starts on.
pub fn default_phrase() -> Phrase {
    COMMON[0].to_phrase()
}

/// Resolves `id` against the built-in packs first, then the custom phrases.
pub fn find(id: &str, custom: &[Phrase]) -> Option<Phrase> {
    COMMON
        .iter()
        .chain(DUAS)
        .chain(DAROODS)
        .find(|phrase| phrase.id == id)
        .map(CatalogPhrase::to_phrase)
        .or_else(|| custom.iter().find(|phrase| phrase.id == id).cloned())
}
