pub struct SubService {
    pub name: &'static str,
    pub url: &'static str,
}

pub struct ServiceCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub sub_services: &'static [SubService],
}

const ECONSULAT: &str = "https://www.econsulat.ro";

pub const SERVICE_CATEGORIES: &[ServiceCategory] = &[
    ServiceCategory {
        id: "notarial",
        title: "Acte Notariale",
        sub_services: &[
            SubService { name: "Procuri", url: "https://econsulat.ro/Procura/DescriereServiciu/401000001" },
            SubService { name: "Declarații", url: "https://econsulat.ro/Declaratie/DescriereServiciu/401000002" },
            SubService { name: "Legalizări copii de pe înscrisuri", url: "https://econsulat.ro/LegalizareCopiiInscrisuri/DescriereServiciu/402000001" },
            SubService { name: "Legalizarea semnăturilor de pe înscrisuri sub semnătură privată", url: "https://econsulat.ro/LegalizareSemnPrivata/DescriereServiciu/402000004" },
            SubService { name: "Supralegalizarea sigiliilor şi semnăturilor de pe acte oficiale", url: "https://econsulat.ro/LegalizareSigSemnMAE/DescriereServiciu/402000003" },
            SubService { name: "Legalizarea semnăturii unui traducător autorizat", url: "https://econsulat.ro/LegalizareSemnTraducatorMJ/DescriereServiciu/402020001" },
            SubService { name: "Efectuarea și legalizarea de traduceri", url: "https://econsulat.ro/EfectLegalizareTraducere/DescriereServiciu/402020002" },
            SubService { name: "Testamente", url: "https://econsulat.ro/Testament/DescriereServiciu/401010001" },
            SubService { name: "Eliberarea duplicatelor actelor autentice", url: "https://econsulat.ro/EliberareDuplicatActAutentic/DescriereServiciu/401010002" },
            SubService { name: "Convenţie de alegere a legii aplicabile regimului matrimonial", url: "https://econsulat.ro/ConventieRegimulMatrimonial/DescriereServiciu/401010004" },
        ],
    },
    ServiceCategory {
        id: "civil-status",
        title: "Acte de Stare Civilă",
        sub_services: &[
            SubService { name: "Înscriere certificat naștere", url: "https://econsulat.ro/InregistrareNastere/DescriereServiciu/300000002" },
            SubService { name: "Înscriere certificat căsătorie", url: "https://econsulat.ro/InscriereCertificatDeCasatorie/DescriereServiciu/300000004" },
            SubService { name: "Oficierea căsătoriei la misiunea diplomatică", url: "https://econsulat.ro/OficiereCasatorieMDOC/DescriereServiciu/300000003" },
            SubService { name: "Înscriere certificat deces", url: "https://econsulat.ro/InregistrareDeces/DescriereServiciu/300000005" },
            SubService { name: "Înscriere de mențiuni privind statutul civil", url: "https://econsulat.ro/InscriereMentiuni/DescriereServiciu/300000007" },
            SubService { name: "Transcriere certificat de deces străin", url: "https://econsulat.ro/InscriereCertificatDeces/DescriereServiciu/300000006" },
        ],
    },
    ServiceCategory {
        id: "citizenship",
        title: "Cetățenie",
        sub_services: &[
            SubService { name: "Redobândire cetățenie", url: ECONSULAT },
            SubService { name: "Renunțare cetățenie", url: ECONSULAT },
        ],
    },
    ServiceCategory {
        id: "travel",
        title: "Documente de Călătorie",
        sub_services: &[
            SubService { name: "Pașaport simplu electronic", url: ECONSULAT },
            SubService { name: "Titlu de călătorie", url: ECONSULAT },
        ],
    },
    ServiceCategory {
        id: "evisa",
        title: "E-Viză",
        sub_services: &[SubService { name: "Portal E-Viza", url: "http://evisa.mae.ro/" }],
    },
    ServiceCategory {
        id: "documents-from-romania",
        title: "Obținere Acte din România",
        sub_services: &[
            SubService { name: "Cazier judiciar", url: ECONSULAT },
            SubService { name: "Duplicate acte stare civilă", url: ECONSULAT },
        ],
    },
    ServiceCategory {
        id: "marriage-banns",
        title: "Publicații de Căsătorie",
        sub_services: &[SubService { name: "Publicații", url: ECONSULAT }],
    },
    ServiceCategory {
        id: "passport-status",
        title: "Stare Pașaport Electronic",
        sub_services: &[SubService { name: "Verificare status", url: ECONSULAT }],
    },
    ServiceCategory {
        id: "other",
        title: "Alte Servicii",
        sub_services: &[
            SubService { name: "Asistență consulară", url: ECONSULAT },
            SubService { name: "Informații generale", url: "https://www.mae.ro" },
        ],
    },
];
