pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct FaqCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub questions: &'static [FaqEntry],
}

pub const FAQ_CATEGORIES: &[FaqCategory] = &[
    FaqCategory {
        id: "travel",
        title: "Acte necesare documente călătorie/pașaport",
        questions: &[
            FaqEntry {
                question: "Ce acte sunt necesare pentru pașaportul simplu electronic?",
                answer: "Cartea de identitate în original, pașaportul anterior (dacă există), dovada achitării taxei consulare.",
            },
            FaqEntry {
                question: "Cât durează eliberarea pașaportului?",
                answer: "Pașapoartele electronice sunt confecționate în România și trimise la consulat. Durata medie este de 2-4 săptămâni.",
            },
        ],
    },
    FaqCategory {
        id: "citizenship",
        title: "Cetățenie română",
        questions: &[
            FaqEntry {
                question: "Cum pot redobândi cetățenia română?",
                answer: "Trebuie să depuneți un dosar complet la Autoritatea Națională pentru Cetățenie sau la misiunile diplomatice.",
            },
            FaqEntry {
                question: "Pot avea dublă cetățenie?",
                answer: "Da, statul român permite dubla cetățenie.",
            },
        ],
    },
    FaqCategory {
        id: "notary",
        title: "Acte notariale",
        questions: &[FaqEntry {
            question: "Pot face o procură la consulat?",
            answer: "Da, consulatul îndeplinește funcții notariale pentru cetățenii români.",
        }],
    },
    FaqCategory {
        id: "other",
        title: "Alte servicii",
        questions: &[FaqEntry {
            question: "Cum pot obține un cazier judiciar?",
            answer: "Se poate solicita la consulat. Eliberarea se face de obicei pe loc sau în câteva zile.",
        }],
    },
];
