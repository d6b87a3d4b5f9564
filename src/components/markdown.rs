use dioxus::prelude::*;
use crate::page::markdown::{ parse, MdBlock, Span };

#[component]
pub fn Markdown(body: String) -> Element {
    let blocks = parse(&body);

    rsx! {
        div {
            class: "markdown",
            for block in blocks {
                MarkdownBlock { block }
            }
        }
    }
}

#[component]
fn MarkdownBlock(block: MdBlock) -> Element {
    match block {
        MdBlock::Heading { level, spans } => {
            let inner = render_spans(spans);
            match level {
                1 => rsx! { h1 { {inner} } },
                2 => rsx! { h2 { {inner} } },
                3 => rsx! { h3 { {inner} } },
                4 => rsx! { h4 { {inner} } },
                5 => rsx! { h5 { {inner} } },
                _ => rsx! { h6 { {inner} } },
            }
        }
        MdBlock::Paragraph(spans) => {
            let inner = render_spans(spans);
            rsx! { p { {inner} } }
        }
    }
}

fn render_spans(spans: Vec<Span>) -> Element {
    rsx! {
        for span in spans {
            {render_span(span)}
        }
    }
}

fn render_span(span: Span) -> Element {
    match span {
        Span::Text(text) => rsx! { "{text}" },
        Span::Code(code) => rsx! { code { "{code}" } },
        Span::Strong(inner) => rsx! { strong { {render_spans(inner)} } },
        Span::Emphasis(inner) => rsx! { em { {render_spans(inner)} } },
    }
}
