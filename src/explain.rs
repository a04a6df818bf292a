//! Human-readable descriptions for well-known annotation labels.
//!
//! Covers the universal part-of-speech tags, the Penn Treebank fine-grained
//! tag set, and the OntoNotes / WikiNER entity types. Packages may declare
//! labels outside this table; those display without a description.

const GLOSSARY: &[(&str, &str)] = &[
    // Universal part-of-speech tags
    ("ADJ", "adjective"),
    ("ADP", "adposition"),
    ("ADV", "adverb"),
    ("AUX", "auxiliary"),
    ("CONJ", "conjunction"),
    ("CCONJ", "coordinating conjunction"),
    ("DET", "determiner"),
    ("INTJ", "interjection"),
    ("NOUN", "noun"),
    ("NUM", "numeral"),
    ("PART", "particle"),
    ("PRON", "pronoun"),
    ("PROPN", "proper noun"),
    ("PUNCT", "punctuation"),
    ("SCONJ", "subordinating conjunction"),
    ("SYM", "symbol"),
    ("VERB", "verb"),
    ("X", "other"),
    ("SPACE", "whitespace"),
    // Penn Treebank fine-grained tags
    ("CC", "conjunction, coordinating"),
    ("CD", "cardinal number"),
    ("DT", "determiner"),
    ("EX", "existential there"),
    ("FW", "foreign word"),
    ("IN", "conjunction, subordinating or preposition"),
    ("JJ", "adjective"),
    ("JJR", "adjective, comparative"),
    ("JJS", "adjective, superlative"),
    ("LS", "list item marker"),
    ("MD", "verb, modal auxiliary"),
    ("NN", "noun, singular or mass"),
    ("NNS", "noun, plural"),
    ("NNP", "noun, proper singular"),
    ("NNPS", "noun, proper plural"),
    ("PDT", "predeterminer"),
    ("POS", "possessive ending"),
    ("PRP", "pronoun, personal"),
    ("PRP$", "pronoun, possessive"),
    ("RB", "adverb"),
    ("RBR", "adverb, comparative"),
    ("RBS", "adverb, superlative"),
    ("RP", "adverb, particle"),
    ("TO", "infinitival \"to\""),
    ("UH", "interjection"),
    ("VB", "verb, base form"),
    ("VBD", "verb, past tense"),
    ("VBG", "verb, gerund or present participle"),
    ("VBN", "verb, past participle"),
    ("VBP", "verb, non-3rd person singular present"),
    ("VBZ", "verb, 3rd person singular present"),
    ("WDT", "wh-determiner"),
    ("WP", "wh-pronoun, personal"),
    ("WP$", "wh-pronoun, possessive"),
    ("WRB", "wh-adverb"),
    ("HYPH", "punctuation mark, hyphen"),
    ("NFP", "superfluous punctuation"),
    ("AFX", "affix"),
    ("XX", "unknown"),
    ("_SP", "whitespace"),
    // Entity types (OntoNotes)
    ("PERSON", "People, including fictional"),
    ("NORP", "Nationalities or religious or political groups"),
    ("FAC", "Buildings, airports, highways, bridges, etc."),
    ("ORG", "Companies, agencies, institutions, etc."),
    ("GPE", "Countries, cities, states"),
    ("LOC", "Non-GPE locations, mountain ranges, bodies of water"),
    ("PRODUCT", "Objects, vehicles, foods, etc. (not services)"),
    ("EVENT", "Named hurricanes, battles, wars, sports events, etc."),
    ("WORK_OF_ART", "Titles of books, songs, etc."),
    ("LAW", "Named documents made into laws"),
    ("LANGUAGE", "Any named language"),
    ("DATE", "Absolute or relative dates or periods"),
    ("TIME", "Times smaller than a day"),
    ("PERCENT", "Percentage, including \"%\""),
    ("MONEY", "Monetary values, including unit"),
    ("QUANTITY", "Measurements, as of weight or distance"),
    ("ORDINAL", "\"first\", \"second\", etc."),
    ("CARDINAL", "Numerals that do not fall under another type"),
    // Entity types (WikiNER)
    ("PER", "Named person or family"),
    ("MISC", "Miscellaneous entities, e.g. events, nationalities, products"),
];

/// Look up the description for a label, if it is a well-known one.
pub fn explain(label: &str) -> Option<&'static str> {
    GLOSSARY.iter().find(|(known, _)| *known == label).map(|(_, description)| *description)
}
