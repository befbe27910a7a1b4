//! Built-in default (user-agent) stylesheet.
//!
//! Written in the engine's own subset grammar and parsed through the normal
//! pipeline, so the defaults cost nothing special and stay in one obvious
//! place. One selector per rule: the subset grammar has no comma-separated
//! selector lists. Values here are opaque strings to the engine, like any
//! other declaration; the layout consumer interprets them.

/// Default display rules for common HTML elements.
pub const DEFAULT_STYLESHEET: &str = "\
html { display: block; }
head { display: none; }
body { display: block; }
div { display: block; }
p { display: block; }
h1 { display: block; }
h2 { display: block; }
h3 { display: block; }
h4 { display: block; }
h5 { display: block; }
h6 { display: block; }
ul { display: block; }
ol { display: block; }
li { display: block; }
blockquote { display: block; }
pre { display: block; }
section { display: block; }
article { display: block; }
header { display: block; }
footer { display: block; }
main { display: block; }
nav { display: block; }
span { display: inline; }
a { display: inline; }
em { display: inline; }
strong { display: inline; }
code { display: inline; }
b { display: inline; }
i { display: inline; }
";
