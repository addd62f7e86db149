//! Bundled demo network, a Delhi-inspired six-line system

use hashbrown::HashMap;

use super::definition::{Line, NetworkDefinition};
use super::types::Position;

fn line(id: &str, name: &str, color: &str, stations: &[&str]) -> Line {
    Line {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
        stations: stations.iter().map(ToString::to_string).collect(),
    }
}

/// The network the service boots with when no other definition is supplied
pub fn default_network() -> NetworkDefinition {
    let lines = vec![
        line(
            "yellow",
            "Yellow Line",
            "#F7C948",
            &[
                "samaypur-badli",
                "rohini-sector-18",
                "haiderpur-badli-mor",
                "jahangirpuri",
                "adarsh-nagar",
                "ghitorni",
                "arjan-garh",
                "guru-dronacharya",
                "sikandarpur",
                "mg-road",
                "iffco-chowk",
                "huda-city-centre",
                "vishwavidyalaya",
                "vidhan-sabha",
                "civil-lines",
                "kashmere-gate",
                "chandni-chowk",
                "chawri-bazar",
                "new-delhi",
                "rajiv-chowk",
                "patel-chowk",
                "central-secretariat",
                "udyog-bhawan",
                "race-course",
                "jor-bagh",
                "ina",
                "aiims",
                "green-park",
                "hauz-khas",
                "malviya-nagar",
                "saket",
                "qutab-minar",
            ],
        ),
        line(
            "blue",
            "Blue Line",
            "#2196F3",
            &[
                "noida-electronic-city",
                "noida-sector-62",
                "noida-sector-59",
                "noida-sector-52",
                "noida-sector-34",
                "noida-sector-15",
                "new-ashok-nagar",
                "mayur-vihar-ext",
                "mayur-vihar-1",
                "akshardham",
                "yamuna-bank",
                "indraprastha",
                "pragati-maidan",
                "mandi-house",
                "barakhamba-road",
                "rajiv-chowk",
                "ramakrishna-ashram",
                "jhandewalan",
                "karol-bagh",
                "rajendra-place",
                "patel-nagar",
                "shadipur",
                "kirti-nagar",
                "moti-nagar",
                "ramesh-nagar",
                "rajouri-garden",
                "tagore-garden",
                "subhash-nagar",
                "tilak-nagar",
                "janakpuri-east",
                "janakpuri-west",
                "dwarka",
            ],
        ),
        line(
            "red",
            "Red Line",
            "#EF5350",
            &[
                "shaheed-sthal",
                "hindon-river",
                "arthala",
                "mohan-nagar",
                "shyam-park",
                "major-mohit-sharma",
                "raj-bagh",
                "shaheed-nagar",
                "dilshad-garden",
                "jhilmil",
                "mansarovar-park",
                "shahdara",
                "welcome",
                "seelampur",
                "shastri-park",
                "kashmere-gate",
                "tis-hazari",
                "pul-bangash",
                "pratap-nagar",
                "shastri-nagar",
                "inder-lok",
                "kanhaiya-nagar",
                "keshav-puram",
                "netaji-subhash-place",
                "kohat-enclave",
                "pitam-pura",
                "rohini-east",
                "rohini-west",
                "rithala",
            ],
        ),
        line(
            "green",
            "Green Line",
            "#66BB6A",
            &[
                "inderlok-green",
                "ashok-park-main",
                "punjabi-bagh",
                "shivaji-park",
                "madipur",
                "paschim-vihar-east",
                "paschim-vihar-west",
                "peeragarhi",
                "udyog-nagar",
                "surajmal-stadium",
                "nangloi",
                "nangloi-railway",
                "rajdhani-park",
                "mundka",
                "mundka-ind-area",
                "ghevra",
                "tikri-kalan",
                "tikri-border",
                "pandit-shree-ram-sharma",
                "bahadurgarh-city",
                "brigadier-hoshiar-singh",
            ],
        ),
        line(
            "violet",
            "Violet Line",
            "#AB47BC",
            &[
                "kashmere-gate-violet",
                "lal-quila",
                "jama-masjid",
                "delhi-gate",
                "ito",
                "mandi-house",
                "janpath",
                "central-secretariat",
                "khan-market",
                "jawaharlal-nehru-stadium",
                "jangpura",
                "lajpat-nagar",
                "moolchand",
                "kailash-colony",
                "nehru-place",
                "greater-kailash",
                "govindpuri",
                "harkesh-nagar-okhla",
                "jasola-apollo",
                "sarita-vihar",
                "mohan-estate",
                "tughlakabad",
                "badarpur-border",
                "sarai",
                "nhpc-chowk",
                "mewala-maharajpur",
                "sector-28-faridabad",
                "badkhal-mor",
                "old-faridabad",
                "neelam-chowk-ajronda",
                "escorts-mujesar",
                "raja-nahar-singh",
            ],
        ),
        line(
            "magenta",
            "Magenta Line",
            "#EC407A",
            &[
                "janakpuri-west",
                "dabri-mor",
                "dashrathpuri",
                "palam",
                "sadar-bazar-cantonment",
                "terminal-1-igi-airport",
                "shankar-vihar",
                "vasant-vihar",
                "munirka",
                "r-k-puram",
                "ina-magenta",
                "sarojini-nagar",
                "ignou",
                "arjan-garh",
                "ghitorni",
                "sultanpur",
                "chattarpur",
                "qutab-minar",
                "saket",
                "malviya-nagar",
                "hauz-khas",
                "panchsheel-park",
                "chirag-delhi",
                "greater-kailash",
                "nehru-enclave",
                "kalkaji-mandir",
                "okhla-nsic",
                "sukhdev-vihar",
                "jamia-millia-islamia",
                "okhla-vihar",
                "jasola-vihar-shaheen-bagh",
                "kalindi-kunj",
                "botanical-garden",
            ],
        ),
    ];

    let positions: HashMap<_, _> = POSITIONS
        .iter()
        .map(|&(id, x, y)| (id.to_string(), Position { x, y }))
        .collect();

    NetworkDefinition::new(lines, positions)
}

// Schematic map coordinates on a 50px grid, viewBox 1500x1300.
// Stations shared between lines carry a single entry.
const POSITIONS: &[(&str, i32, i32)] = &[
    // Yellow line, vertical through the center
    ("samaypur-badli", 550, 40),
    ("rohini-sector-18", 550, 90),
    ("haiderpur-badli-mor", 550, 140),
    ("jahangirpuri", 550, 190),
    ("adarsh-nagar", 550, 240),
    ("ghitorni", 550, 290),
    ("arjan-garh", 550, 340),
    ("guru-dronacharya", 550, 390),
    ("sikandarpur", 550, 440),
    ("mg-road", 550, 490),
    ("iffco-chowk", 550, 540),
    ("huda-city-centre", 550, 590),
    ("vishwavidyalaya", 620, 190),
    ("vidhan-sabha", 620, 240),
    ("civil-lines", 620, 290),
    ("kashmere-gate", 660, 340),
    ("chandni-chowk", 660, 390),
    ("chawri-bazar", 660, 440),
    ("new-delhi", 660, 490),
    ("rajiv-chowk", 660, 540),
    ("patel-chowk", 660, 590),
    ("central-secretariat", 660, 640),
    ("udyog-bhawan", 660, 700),
    ("race-course", 660, 750),
    ("jor-bagh", 660, 800),
    ("ina", 660, 850),
    ("aiims", 660, 900),
    ("green-park", 660, 950),
    ("hauz-khas", 660, 1000),
    ("malviya-nagar", 660, 1050),
    ("saket", 660, 1100),
    ("qutab-minar", 660, 1150),
    // Blue line, horizontal through the center
    ("noida-electronic-city", 1350, 540),
    ("noida-sector-62", 1300, 540),
    ("noida-sector-59", 1250, 540),
    ("noida-sector-52", 1200, 540),
    ("noida-sector-34", 1150, 540),
    ("noida-sector-15", 1100, 540),
    ("new-ashok-nagar", 1050, 540),
    ("mayur-vihar-ext", 1000, 540),
    ("mayur-vihar-1", 950, 540),
    ("akshardham", 900, 540),
    ("yamuna-bank", 850, 540),
    ("indraprastha", 800, 540),
    ("pragati-maidan", 750, 540),
    ("mandi-house", 710, 540),
    ("barakhamba-road", 610, 540),
    ("ramakrishna-ashram", 560, 540),
    ("jhandewalan", 510, 540),
    ("karol-bagh", 460, 540),
    ("rajendra-place", 410, 540),
    ("patel-nagar", 360, 540),
    ("shadipur", 310, 540),
    ("kirti-nagar", 260, 540),
    ("moti-nagar", 210, 540),
    ("ramesh-nagar", 160, 540),
    ("rajouri-garden", 110, 540),
    ("tagore-garden", 60, 540),
    ("subhash-nagar", 60, 590),
    ("tilak-nagar", 60, 640),
    ("janakpuri-east", 60, 690),
    ("janakpuri-west", 60, 740),
    ("dwarka", 60, 790),
    // Red line, horizontal across the top
    ("shaheed-sthal", 1350, 340),
    ("hindon-river", 1300, 340),
    ("arthala", 1250, 340),
    ("mohan-nagar", 1200, 340),
    ("shyam-park", 1150, 340),
    ("major-mohit-sharma", 1100, 340),
    ("raj-bagh", 1050, 340),
    ("shaheed-nagar", 1000, 340),
    ("dilshad-garden", 950, 340),
    ("jhilmil", 900, 340),
    ("mansarovar-park", 850, 340),
    ("shahdara", 800, 340),
    ("welcome", 750, 340),
    ("seelampur", 720, 340),
    ("shastri-park", 690, 340),
    ("tis-hazari", 610, 340),
    ("pul-bangash", 560, 340),
    ("pratap-nagar", 510, 340),
    ("shastri-nagar", 460, 340),
    ("inder-lok", 410, 340),
    ("kanhaiya-nagar", 360, 340),
    ("keshav-puram", 310, 340),
    ("netaji-subhash-place", 260, 340),
    ("kohat-enclave", 210, 340),
    ("pitam-pura", 160, 340),
    ("rohini-east", 110, 340),
    ("rohini-west", 60, 340),
    ("rithala", 20, 340),
    // Green line, branching southwest
    ("inderlok-green", 410, 390),
    ("ashok-park-main", 370, 410),
    ("punjabi-bagh", 330, 430),
    ("shivaji-park", 290, 450),
    ("madipur", 240, 450),
    ("paschim-vihar-east", 190, 450),
    ("paschim-vihar-west", 140, 450),
    ("peeragarhi", 90, 450),
    ("udyog-nagar", 40, 450),
    ("surajmal-stadium", 40, 500),
    ("nangloi", 40, 550),
    ("nangloi-railway", 40, 600),
    ("rajdhani-park", 40, 650),
    ("mundka", 40, 700),
    ("mundka-ind-area", 40, 750),
    ("ghevra", 40, 800),
    ("tikri-kalan", 40, 850),
    ("tikri-border", 40, 900),
    ("pandit-shree-ram-sharma", 40, 950),
    ("bahadurgarh-city", 40, 1000),
    ("brigadier-hoshiar-singh", 40, 1050),
    // Violet line, north-south right of yellow
    ("kashmere-gate-violet", 700, 340),
    ("lal-quila", 740, 390),
    ("jama-masjid", 740, 440),
    ("delhi-gate", 740, 490),
    ("ito", 720, 520),
    ("janpath", 690, 590),
    ("khan-market", 700, 700),
    ("jawaharlal-nehru-stadium", 740, 750),
    ("jangpura", 780, 800),
    ("lajpat-nagar", 820, 850),
    ("moolchand", 820, 900),
    ("kailash-colony", 820, 950),
    ("nehru-place", 820, 1000),
    ("greater-kailash", 820, 1050),
    ("govindpuri", 820, 1100),
    ("harkesh-nagar-okhla", 860, 1150),
    ("jasola-apollo", 910, 1150),
    ("sarita-vihar", 960, 1150),
    ("mohan-estate", 1010, 1150),
    ("tughlakabad", 1060, 1150),
    ("badarpur-border", 1110, 1150),
    ("sarai", 1110, 1200),
    ("nhpc-chowk", 1110, 1250),
    ("mewala-maharajpur", 1110, 1300),
    ("sector-28-faridabad", 1160, 1300),
    ("badkhal-mor", 1210, 1300),
    ("old-faridabad", 1260, 1300),
    ("neelam-chowk-ajronda", 1310, 1300),
    ("escorts-mujesar", 1360, 1300),
    ("raja-nahar-singh", 1420, 1300),
    // Magenta line, diagonal northwest to southeast
    ("dabri-mor", 110, 770),
    ("dashrathpuri", 160, 800),
    ("palam", 210, 830),
    ("sadar-bazar-cantonment", 260, 860),
    ("terminal-1-igi-airport", 310, 890),
    ("shankar-vihar", 360, 920),
    ("vasant-vihar", 410, 950),
    ("munirka", 460, 970),
    ("r-k-puram", 510, 990),
    ("ina-magenta", 600, 850),
    ("sarojini-nagar", 550, 830),
    ("ignou", 560, 880),
    ("sultanpur", 600, 1100),
    ("chattarpur", 620, 1130),
    ("panchsheel-park", 710, 1000),
    ("chirag-delhi", 760, 1000),
    ("nehru-enclave", 770, 1050),
    ("kalkaji-mandir", 870, 1050),
    ("okhla-nsic", 920, 1050),
    ("sukhdev-vihar", 970, 1050),
    ("jamia-millia-islamia", 1020, 1050),
    ("okhla-vihar", 1070, 1050),
    ("jasola-vihar-shaheen-bagh", 1120, 1050),
    ("kalindi-kunj", 1170, 1050),
    ("botanical-garden", 1230, 1050),
];
