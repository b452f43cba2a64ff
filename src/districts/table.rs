//! Embedded district table
//!
//! Seven districts of the Belagavi Division. Values are kept exactly as
//! collected, including spelling variants ("Kunita"/"Kunitha") and the
//! Kannada-script parenthetical on Syntheri Rocks.

use super::types::DistrictRecord;

// ============================================================================
// EMBEDDED DISTRICT DATA
// ============================================================================

pub(crate) static DISTRICTS: &[DistrictRecord] = &[
    DistrictRecord {
        name: "Haveri",
        tagline: "From plains to hills — Haveri's legacy thrives through history and culture.",
        geography: "Central Karnataka plains; rivers: Varada, Tungabhadra tributaries.",
        historical_places: &["Ranebennur Blackbuck Sanctuary"],
        culture_festivals: &["Dollu Kunitha, Local jatres, Byadgi chili festival"],
        folk_dances: &["Suggi Kunita"],
        notable_personalities: &["Gangubai Hangal — Hindustani vocalist"],
        food: &["Byadgi Chili", "Jolada Rotti", "Holige"],
        agriculture_economy: &["Chili", "Jowar", "Cotton", "Maize", "Coconut"],
        industries: &["Agricultural processing"],
        natural_sanctuaries: &["Ranebennur Blackbuck Sanctuary"],
        tourist_attractions: &["Byadgi", "Ranebennur Blackbuck Sanctuary"],
    },
    DistrictRecord {
        name: "Bagalkote",
        tagline: "The soil that gave warriors and wisdom to the world.",
        geography: "Northern Karnataka plains; rivers: Krishna, Ghataprabha.",
        historical_places: &["Badami Fort", "Badami Cave Temples", "Pattadakal", "Aihole", "Kudalasangama"],
        culture_festivals: &["Dollu Kunitha, Veeragase, Temple festivals"],
        folk_dances: &["Veeragase"],
        notable_personalities: &["Basavanna (via Kudalasangama)"],
        food: &["Jolada Rotti", "Karadantu", "Holige"],
        agriculture_economy: &["Sugarcane", "Cotton", "Jowar", "Pulses"],
        industries: &["Sugar factories"],
        natural_sanctuaries: &["Ghataprabha Bird Sanctuary"],
        tourist_attractions: &["Badami Cave Temples", "Pattadakal", "Aihole", "Kudalasangama"],
    },
    DistrictRecord {
        name: "Vijayapura",
        tagline: "Where forts speak, and history lives on.",
        geography: "Deccan Plateau; semi-arid; rivers: Bhima, Doni.",
        historical_places: &["Gol Gumbaz", "Ibrahim Rauza", "Bijapur Fort", "Jama Masjid"],
        culture_festivals: &["Classical music, Qawwali, Sufi festivals"],
        folk_dances: &["Regional folk dances from northern Karnataka"],
        notable_personalities: &["Sultan Mohammed Adil Shah — Patron of arts"],
        food: &["Biryani", "Kebabs", "Jolada Rotti"],
        agriculture_economy: &["Jowar", "Sugarcane", "Groundnut", "Maize"],
        industries: &["Local artisan crafts, Historical tourism"],
        natural_sanctuaries: &[],
        tourist_attractions: &["Gol Gumbaz", "Ibrahim Rauza", "Bijapur Fort", "Barakaman"],
    },
    DistrictRecord {
        name: "Uttara Kannada",
        tagline: "From hills to coasts — Belagavi Division breathes geography, culture, and grace.",
        geography: "Western Ghats, Arabian Sea coast, rivers: Kali, Gangavali, Sharavathi. Tropical climate; heavy rainfall.",
        historical_places: &[
            "Mirjan Fort",
            "Syntheri Rocks (ಸಿಂಥೇರಿ ಬಂಡೆಕಲ್ಲು)",
            "Dandeli",
            "Sirsi Marikamba Festival site",
        ],
        culture_festivals: &["Yakshagana, Dollu Kunitha, Siddi Dhamal, Sirsi Marikamba, Karavali Utsav"],
        folk_dances: &["Siddi Dhamal", "Dollu Kunita"],
        notable_personalities: &[
            "Shivarama Karantha — Writer, environmentalist",
            "Raghunath Krishna Karanth — Linguist",
        ],
        food: &["Kori Rotti", "Fish Curry", "Holige"],
        agriculture_economy: &["Rice", "Cashew", "Coconut", "Arecanut", "Spices"],
        industries: &["Eco-tourism, Fisheries"],
        natural_sanctuaries: &[
            "Jog Falls",
            "Anshi National Park & Kali Tiger Reserve",
            "Attiveri Bird Sanctuary",
        ],
        tourist_attractions: &["Jog Falls", "Mirjan Fort", "Syntheri Rocks", "Karwar Beaches", "Dandeli"],
    },
    DistrictRecord {
        name: "Belagavi",
        tagline: "The soil that gave warriors and wisdom to the world.",
        geography: "Located in Northern Karnataka; part of Western Ghats & Bayalu Seeme transition zone. Rivers: Malaprabha, Ghataprabha. Climate: Moderate; monsoon July–Sept; fertile black soil.",
        historical_places: &[
            "Kittur Fort — Rani Chennamma's resistance",
            "Belagavi Fort — Chalukya & Maratha era",
            "Savdatti Yellamma Temple — pilgrimage & fairs",
        ],
        culture_festivals: &[
            "Folk arts: Veeragase, Dollu Kunitha, Suggi Kunita",
            "Festivals: Kittur Utsava, Ugadi, Deepavali",
        ],
        folk_dances: &["Veeragase", "Suggi Kunita", "Siddi Dhamal"],
        notable_personalities: &[
            "V. K. Gokak — Poet & scholar",
            "Chandrashekhara Kambar — Poet & playwright",
        ],
        food: &["Belagavi Kunda", "Mandige", "Jolada Rotti"],
        agriculture_economy: &["Sugarcane", "Maize", "Jowar", "Pulses"],
        industries: &["Krishna Sugar Factory"],
        natural_sanctuaries: &["Bhimgad Sanctuary", "Gattaprabha Bird Sanctuary"],
        tourist_attractions: &["Kittur Fort", "Belagavi Fort", "Savdatti Yellamma Temple"],
    },
    DistrictRecord {
        name: "Dharwad",
        tagline: "Every drumbeat echoes the heart of Karnataka.",
        geography: "Malaprabha & Varada rivers; plateau region. Moderate climate; fertile red soil.",
        historical_places: &["Western Chalukya monuments", "Temples at Unkal, Hubli"],
        culture_festivals: &[
            "Hindustani music, Dollu Kunitha",
            "Festivals: Unkal Lake events, Sangeet Utsav",
        ],
        folk_dances: &["Dollu Kunita", "Kolata"],
        notable_personalities: &["Da. Ra. Bendre — Poet", "Bhimsen Joshi — Hindustani vocalist"],
        food: &["Dharwad Peda", "Jolada Rotti"],
        agriculture_economy: &["Cotton", "Jowar", "Pulses"],
        industries: &["Tech Park Hubli"],
        natural_sanctuaries: &["Attiveri Bird Sanctuary (border with Uttara Kannada)"],
        tourist_attractions: &["Unkal Lake", "Sadhankeri Park", "Murugha Matha"],
    },
    DistrictRecord {
        name: "Gadag",
        tagline: "The soil that gave warriors and wisdom to the world.",
        geography: "Bayalu Seeme plains; dry deciduous forests.",
        historical_places: &["Trikuteshwara Temple", "Lakkundi Stepwells"],
        culture_festivals: &["Veeragase, Dollu Kunitha, Suggi Kunita, Local jatres & temple festivals"],
        folk_dances: &["Dollu Kunita", "Suggi Kunita"],
        notable_personalities: &["Puttaraja Gavayi — Musician"],
        food: &["Jolada Rotti", "Holige", "Karadantu"],
        agriculture_economy: &["Jowar", "Cotton", "Maize", "Pulses"],
        industries: &["Local handloom & crafts"],
        natural_sanctuaries: &[],
        tourist_attractions: &["Trikuteshwara Temple", "Lakkundi", "Dambal"],
    },
];
