// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Lightbox overlay: `#modal` wrapping `#modalImg`, shown by the `open` class.

use crate::dom::{Document, Element};

pub const MODAL_ID: &str = "modal";
pub const MODAL_IMG_ID: &str = "modalImg";
pub const OPEN_CLASS: &str = "open";

/// Overlay elements for pages that show images.
pub fn elements() -> [Element; 2] {
    [
        Element::new("div", MODAL_ID).with_class("modal"),
        Element::new("img", MODAL_IMG_ID).with_attr("alt", ""),
    ]
}

/// Show `src` in the overlay.
pub fn open(doc: &mut Document, src: &str) {
    doc.set_attr(MODAL_IMG_ID, "src", src);
    doc.add_class(MODAL_ID, OPEN_CLASS);
}

pub fn close(doc: &mut Document) {
    doc.remove_class(MODAL_ID, OPEN_CLASS);
}

pub fn is_open(doc: &Document) -> bool {
    doc.has_class(MODAL_ID, OPEN_CLASS)
}

/// Page-wide keydown listener: Escape closes the overlay, whatever page is
/// showing. Other keys are ignored.
pub fn handle_key(doc: &mut Document, key: &str) {
    if key == "Escape" {
        close(doc);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::PageKind;

    fn gallery_doc() -> Document {
        PageKind::Gallery.shell()
    }

    #[test]
    fn test_open_sets_src_and_class() {
        let mut doc = gallery_doc();
        open(&mut doc, "/img/deck.jpg");
        assert_eq!(doc.attr(MODAL_IMG_ID, "src"), Some("/img/deck.jpg"));
        assert!(is_open(&doc));
        assert!(doc.has_class(MODAL_ID, "modal"));
    }

    #[test]
    fn test_escape_closes() {
        let mut doc = gallery_doc();
        open(&mut doc, "/img/deck.jpg");
        handle_key(&mut doc, "Enter");
        assert!(is_open(&doc));
        handle_key(&mut doc, "Escape");
        assert!(!is_open(&doc));
        // Already closed: still fine
        handle_key(&mut doc, "Escape");
        assert!(!is_open(&doc));
    }

    #[test]
    fn test_escape_on_page_without_overlay() {
        let mut doc = PageKind::Contact.shell();
        handle_key(&mut doc, "Escape");
        open(&mut doc, "/img/deck.jpg");
        assert!(!is_open(&doc));
    }
}
