//! Renderers for colourizing message patterns

use owo_colors::OwoColorize;

use crate::formatting::*;
use crate::language::*;

/// Embellish fragments with ANSI escapes to create syntax highlighting in
/// terminal output.
pub struct Terminal;

impl Render for Terminal {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::Neutral => content.to_string(),
            Syntax::Indent => content.to_string(),
            Syntax::Newline => "\n".to_string(),
            Syntax::Text => content.to_string(),
            Syntax::Quote => content // constant.character.escape - #ad7fa8 (purple)
                .color(owo_colors::Rgb(0xad, 0x7f, 0xa8))
                .to_string(),
            Syntax::Structure => content // punctuation.section.braces - #999999 bold
                .color(owo_colors::Rgb(153, 153, 153))
                .bold()
                .to_string(),
            Syntax::Argument => content // variable.parameter - #729fcf (light blue) bold
                .color(owo_colors::Rgb(0x72, 0x9f, 0xcf))
                .bold()
                .to_string(),
            Syntax::Kind => content // keyword - #3465a4 (blue) bold
                .color(owo_colors::Rgb(0x34, 0x65, 0xa4))
                .bold()
                .to_string(),
            Syntax::Style => content // string - #4e9a06 (green)
                .color(owo_colors::Rgb(0x4e, 0x9a, 0x06))
                .to_string(),
            Syntax::Offset => content // constant.numeric - #ad7fa8 (purple) bold
                .color(owo_colors::Rgb(0xad, 0x7f, 0xa8))
                .bold()
                .to_string(),
            Syntax::Selector => content // entity.name.tag - #8f5902 (brown) bold
                .color(owo_colors::Rgb(0x8f, 0x59, 0x02))
                .bold()
                .to_string(),
            Syntax::Marker => content // keyword.operator - #cc0000 (red) bold
                .color(owo_colors::Rgb(0xcc, 0x00, 0x00))
                .bold()
                .to_string(),
        }
    }
}

/// We do the printing in two passes. First we convert from our Abstract
/// Syntax Tree types into a Vec of "fragments" (Syntax tag, String pairs).
/// Then second we apply the specified renderer to each pair to result in an
/// embellished/highlighted String.
pub fn render(renderer: &impl Render, message: &Message) -> String {
    // Pass 1: Print AST to tagged fragments
    let fragments = print_with_renderer(message);

    // Pass 2: Render tagged fragments to final output
    render_to_string(renderer, fragments)
}

/// Serialize a message to pattern source, with no markup. Parsing the result
/// gives back a message equal to the one supplied.
pub fn print(message: &Message) -> String {
    render(&Identity, message)
}

/// Pass 2: apply markup to fragments via style() and combine.
fn render_to_string(renderer: &impl Render, fragments: Vec<(Syntax, String)>) -> String {
    let mut output = String::new();

    for (syntax, content) in fragments {
        let rendered = renderer.style(syntax, &content);
        output.push_str(&rendered);
    }

    output
}
