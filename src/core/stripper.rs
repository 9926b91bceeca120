use crate::core::selector::ElementSelector;
use crate::utils::error::Result;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::{NsReader, Writer};

/// Result of one selector application: the rewritten document and whether a
/// matching element was detached.
#[derive(Debug)]
pub struct StripOutcome {
    pub xml: String,
    pub removed: bool,
}

/// Removes the first element matching `selector` (in document order) together
/// with its whole subtree, echoing every other event back verbatim.
///
/// Only the first match is removed; later coincidental matches survive. A match
/// on the root element is skipped rather than failed, since a detached root
/// would leave no document. No match at all is a plain no-op.
pub fn strip_first_match(xml: &str, selector: &ElementSelector) -> Result<StripOutcome> {
    let mut reader = NsReader::from_str(xml);
    let mut writer = Writer::new(Vec::new());

    // Depth of the element containing the cursor; the root element sits at 0.
    let mut depth = 0usize;
    let mut skip_above: Option<usize> = None;
    let mut removed = false;

    loop {
        let (ns, event) = reader.read_resolved_event()?;
        match event {
            Event::Start(e) => {
                let element_depth = depth;
                depth += 1;
                if skip_above.is_some() {
                    continue;
                }
                if !removed && element_depth > 0 && matches_selector(selector, &ns, &e)? {
                    skip_above = Some(element_depth);
                    removed = true;
                    continue;
                }
                writer.write_event(Event::Start(e))?;
            }
            Event::End(e) => {
                depth -= 1;
                if let Some(skip_depth) = skip_above {
                    if depth == skip_depth {
                        skip_above = None;
                    }
                    continue;
                }
                writer.write_event(Event::End(e))?;
            }
            Event::Empty(e) => {
                if skip_above.is_some() {
                    continue;
                }
                if !removed && depth > 0 && matches_selector(selector, &ns, &e)? {
                    removed = true;
                    continue;
                }
                writer.write_event(Event::Empty(e))?;
            }
            Event::Eof => break,
            other => {
                if skip_above.is_none() {
                    writer.write_event(other)?;
                }
            }
        }
    }

    let xml = String::from_utf8(writer.into_inner())?;
    Ok(StripOutcome { xml, removed })
}

fn matches_selector(
    selector: &ElementSelector,
    ns: &ResolveResult,
    element: &BytesStart,
) -> Result<bool> {
    if element.local_name().as_ref() != selector.tag.as_bytes() {
        return Ok(false);
    }

    let in_namespace = matches!(
        ns,
        ResolveResult::Bound(Namespace(n)) if *n == selector.namespace.as_bytes()
    );
    if !in_namespace {
        return Ok(false);
    }

    let Some((attr_name, expected)) = selector.attribute else {
        return Ok(true);
    };

    for attr in element.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == attr_name.as_bytes() {
            let value = attr.unescape_value().map_err(quick_xml::Error::from)?;
            return Ok(value == expected);
        }
    }

    Ok(false)
}
