//! Word lists backing the heuristic recognizer.

pub(crate) const HONORIFICS: &[&str] = &[
    "Mr", "Mrs", "Ms", "Miss", "Dr", "Prof", "Professor", "Sir", "Dame", "Lady", "Lord",
    "President", "Senator", "Sen", "Rep", "Representative", "Congressman", "Congresswoman",
    "General", "Gen", "Colonel", "Col", "Captain", "Capt", "Lieutenant", "Lt", "Sergeant",
    "Sgt", "Admiral", "Adm", "Judge", "Justice", "King", "Queen", "Prince",
    "Princess", "Governor", "Gov", "Rev", "Reverend", "Father", "Pope", "Chancellor",
    "Minister", "Secretary", "Ambassador", "Mayor", "Chairman", "Chairwoman", "Detective",
    "Officer", "Agent", "Premier", "Emperor", "Empress", "Sheikh",
];

/// Abbreviated honorifics that are written with a trailing period.
pub(crate) const DOTTED_HONORIFICS: &[&str] = &[
    "Mr", "Mrs", "Ms", "Dr", "Prof", "Sen", "Rep", "Gen", "Col", "Capt", "Lt", "Sgt", "Adm",
    "Gov", "Rev", "Jr", "Sr", "St", "Mt",
];

/// Capitalized words that start sentences without naming anything.
pub(crate) const SENTENCE_STARTERS: &[&str] = &[
    "The", "A", "An", "This", "That", "These", "Those", "In", "On", "At", "By", "For",
    "From", "With", "Without", "And", "But", "Or", "Nor", "If", "When", "While", "After",
    "Before", "He", "She", "It", "They", "We", "I", "You", "His", "Her", "Their", "Our",
    "My", "Its", "Your", "There", "Here", "As", "So", "Then", "Yet", "Although", "Though",
    "Because", "Since", "During", "Under", "Over", "Meanwhile", "However", "Also", "Some",
    "Many", "Most", "All", "No", "Not", "Every", "Each", "What", "Who", "Why", "How",
    "Where", "Which", "Later", "Today", "Yesterday", "Tomorrow", "Dear", "Yes", "Both",
    "Such", "Other", "Another", "Several", "Once", "Now", "According", "Despite", "To",
    "Of", "Upon", "Until", "Into", "Thus", "Still", "Even", "Only", "Just", "Perhaps",
];

/// Capitalized words that never belong inside a name span.
pub(crate) const SPAN_BREAKERS: &[&str] = &[
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December", "Jan", "Feb", "Mar", "Apr", "Jun", "Jul", "Aug",
    "Sep", "Sept", "Oct", "Nov", "Dec", "Monday", "Tuesday", "Wednesday", "Thursday",
    "Friday", "Saturday", "Sunday", "I",
];

/// Lowercase particles allowed inside a name span when followed by a capitalized word.
pub(crate) const CONNECTORS: &[&str] = &[
    "of", "de", "la", "le", "van", "von", "der", "den", "da", "du", "del", "di", "al",
    "bin", "ibn", "y",
];

pub(crate) const ORG_SUFFIXES: &[&str] = &[
    "Inc", "Incorporated", "Corp", "Corporation", "Company", "Co", "Ltd", "Limited", "LLC",
    "PLC", "GmbH", "Group", "Holdings", "Association", "Institute", "University", "College",
    "School", "Academy", "Agency", "Bank", "Department", "Ministry", "Council", "Committee",
    "Commission", "Party", "Foundation", "Bureau", "Court", "Church", "Army", "Navy",
    "Force", "Forces", "Times", "Post", "Journal", "News", "Press", "Society", "Club",
    "Union", "Federation", "Organization", "Organisation", "Authority", "Office", "Service",
    "Services", "Administration", "Senate", "Congress", "Parliament", "Assembly",
    "Laboratory", "Laboratories", "Hospital", "Museum", "Library", "Trust", "Fund",
    "Industries", "Airlines", "Motors", "Systems", "Technologies", "Partners", "Nations",
];

pub(crate) const ORG_HEADS: &[&str] = &[
    "Bank", "University", "Department", "Ministry", "Bureau", "Church", "Museum", "House",
    "Board", "Council", "Court", "Office", "Institute", "College", "School", "League",
    "Federation", "Order", "Society", "Academy", "Federal", "National", "Royal",
];

pub(crate) const LOC_SUFFIXES: &[&str] = &[
    "River", "Mountains", "Mountain", "Ocean", "Sea", "Lake", "Valley", "Island",
    "Islands", "Desert", "Bay", "Gulf", "Peninsula", "Coast", "Forest", "Canyon", "Strait",
    "Channel", "Falls", "Basin", "Hills", "Range", "Plains", "Delta", "Glacier",
];

pub(crate) const LOC_HEADS: &[&str] = &[
    "Mount", "Mt", "Lake", "Gulf", "Bay", "Cape", "Isle", "Strait", "Sea",
];

pub(crate) const LOCATIONS: &[&str] = &[
    "Europe", "Asia", "Africa", "North America", "South America", "Latin America",
    "Central America", "Antarctica", "Middle East", "Near East", "Far East", "Pacific",
    "Atlantic", "Arctic", "Mediterranean", "Sahara", "Himalayas", "Alps", "Andes",
    "Balkans", "Caribbean", "Siberia", "Scandinavia", "Southeast Asia", "East Asia",
    "Eastern Europe", "Western Europe", "Midwest", "Amazon",
];

pub(crate) const FAC_SUFFIXES: &[&str] = &[
    "Airport", "Bridge", "Street", "Avenue", "Road", "Highway", "Boulevard", "Building",
    "Tower", "Towers", "Hall", "Station", "Square", "Palace", "Stadium", "Center", "Centre",
    "Memorial", "Cathedral", "Castle", "Prison", "Base", "Harbor", "Harbour", "Dam",
    "Tunnel", "Terminal", "Plaza", "Park", "Temple", "Mosque", "Arena", "Pentagon",
];

pub(crate) const GPES: &[&str] = &[
    // countries
    "Afghanistan", "Argentina", "Australia", "Austria", "Belgium", "Brazil", "Britain",
    "Great Britain", "Canada", "Chile", "China", "Colombia", "Cuba", "Czechoslovakia",
    "Denmark", "Egypt", "England", "Ethiopia", "Finland", "France", "Germany",
    "East Germany", "West Germany", "Greece", "Hungary", "India", "Indonesia", "Iran",
    "Iraq", "Ireland", "Israel", "Italy", "Japan", "Jordan", "Kenya", "Korea",
    "North Korea", "South Korea", "Lebanon", "Libya", "Mexico", "Netherlands",
    "New Zealand", "Nigeria", "Norway", "Pakistan", "Palestine", "Peru", "Philippines",
    "Poland", "Portugal", "Russia", "Saudi Arabia", "Scotland", "South Africa", "Soviet Union",
    "Spain", "Sweden", "Switzerland", "Syria", "Taiwan", "Thailand", "Turkey", "Ukraine",
    "United Kingdom", "United States", "United States of America", "America", "Venezuela",
    "Vietnam", "Wales", "Yugoslavia", "US", "USA", "UK", "USSR", "UAE",
    // states and provinces
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado", "Connecticut",
    "Delaware", "Florida", "Georgia", "Hawaii", "Idaho", "Illinois", "Indiana", "Iowa",
    "Kansas", "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts", "Michigan",
    "Minnesota", "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada",
    "New Hampshire", "New Jersey", "New Mexico", "New York", "North Carolina",
    "North Dakota", "Ohio", "Oklahoma", "Oregon", "Pennsylvania", "Rhode Island",
    "South Carolina", "South Dakota", "Tennessee", "Texas", "Utah", "Vermont", "Virginia",
    "West Virginia", "Washington", "Wisconsin", "Wyoming", "Ontario", "Quebec",
    "British Columbia", "Bavaria",
    // cities
    "Amsterdam", "Athens", "Baghdad", "Bangkok", "Beijing", "Beirut", "Berlin", "Boston",
    "Brussels", "Budapest", "Buenos Aires", "Cairo", "Chicago", "Delhi", "New Delhi",
    "Dublin", "Geneva", "Havana", "Hiroshima", "Hong Kong", "Istanbul", "Jerusalem",
    "Kabul", "Kyiv", "Kiev", "Lagos", "Lisbon", "London", "Los Angeles", "Madrid", "Manila",
    "Mexico City", "Miami", "Moscow", "Mumbai", "Munich", "Nagasaki", "Nairobi", "Paris",
    "Philadelphia", "Prague", "Rome", "San Francisco", "Santiago", "Seoul", "Shanghai",
    "Singapore", "Stockholm", "Sydney", "Tehran", "Tokyo", "Toronto", "Vienna", "Warsaw",
    "St Louis", "Yalta", "Potsdam", "Versailles",
];

pub(crate) const NORPS: &[&str] = &[
    "American", "British", "French", "German", "Italian", "Spanish", "Russian", "Chinese",
    "Japanese", "Korean", "Indian", "Mexican", "Canadian", "Australian", "Israeli",
    "Palestinian", "Arab", "African", "European", "Asian", "Soviet", "Iranian", "Iraqi",
    "Egyptian", "Turkish", "Greek", "Polish", "Dutch", "Swedish", "Irish", "Scottish",
    "Ukrainian", "Cuban", "Brazilian", "Vietnamese", "Afghan", "Syrian", "Allied", "Nazi",
    "Democrat", "Democratic", "Republican", "Conservative", "Labour", "Liberal",
    "Communist", "Socialist", "Christian", "Catholic", "Protestant", "Muslim", "Jewish",
    "Jew", "Hindu", "Buddhist", "Sikh", "Islamic", "Orthodox", "Sunni", "Shia",
];

/// Spelled-out ordinals.
pub(crate) const ORDINAL_WORDS: &str =
    "first|second|third|fourth|fifth|sixth|seventh|eighth|ninth|tenth|eleventh|twelfth|hundredth";

/// Spelled-out cardinals.
pub(crate) const CARDINAL_WORDS: &str = "two|three|four|five|six|seven|eight|nine|ten|eleven|twelve|twenty|thirty|forty|fifty|hundreds?|thousands?|millions?|billions?|dozens?";

/// Units accepted after a number for `QUANTITY`.
pub(crate) const UNITS: &str = "miles?|kilomet(?:er|re)s?|km|met(?:er|re)s?|feet|foot|ft|inch(?:es)?|pounds|lbs?|kg|kilograms?|grams?|tons?|tonnes?|acres?|hectares?|gallons?|lit(?:er|re)s?|barrels?|degrees|mph|square miles";

/// Whether `word` is a member of `list`.
pub(crate) fn contains(list: &[&str], word: &str) -> bool {
    list.iter().any(|entry| *entry == word)
}

/// Match a NORP word, accepting the plural form (`Americans`, `Democrats`).
pub(crate) fn is_norp(word: &str) -> bool {
    contains(NORPS, word)
        || word
            .strip_suffix('s')
            .is_some_and(|singular| contains(NORPS, singular))
}
