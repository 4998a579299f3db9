//! Shared documents for unit tests.

/// One chapter, one scene, two paragraphs.
pub const SIMPLE_BOOK: &str = r#"# Pride and Prejudice:

<!-- {
  "author": "Jane Austen",
  "year": "1813",
  "keywords": [ "classic", "feminist" ],
  "genres": [ "Romance" ],
  "characters": {
    "major": [
      {
        "description": "of Longbourn-house, Hertfordshire. Entailed estate with £2,000 a year. Married to Mrs. Bennet.",
        "name": "Mr. Bennet",
        "aliases": ["Bob", "Sir"]
      }],
    "minor": [
    {
      "description": "Companion to Miss Darcy",
      "name": "Mrs. Annesley",
      "aliases": []
    }] }} -->

## Chapter One:

<!-- {
"description": "News of Mr. Bingley Coming to Netherfield",
"location": "Longbourn",
"pov": "Mr. Bennet",
"status": "Finished",
"analytic_info": {}
} -->

It is a truth universally acknowledged, that a single man in possession of a good fortune, must be in want of a wife.

*However* little known the feelings or views of such a man may be on his first entering a neighbourhood, this truth is so well fixed in the minds of the surrounding families, that he is considered the rightful property of some one or other of their daughters.
"#;
