use super::{single_match, LicenseClassifier, LicenseError};
use regex::Regex;
use tracing::trace;

/// Characteristic phrases for a license
///
/// Matching runs on lowercase text with whitespace collapsed to single spaces.
/// A license matches when every `required` pattern matches and no `forbidden`
/// pattern does.
struct LicensePattern {
    id: &'static str,
    required: &'static [&'static str],
    forbidden: &'static [&'static str],
}

const KNOWN_LICENSES: &[LicensePattern] = &[
    LicensePattern {
        id: "Apache-2.0",
        required: &[r"apache license,? version 2\.0"],
        forbidden: &[],
    },
    LicensePattern {
        id: "MIT",
        required: &[r"permission is hereby granted, free of charge, to any person obtaining a copy"],
        forbidden: &[],
    },
    LicensePattern {
        id: "ISC",
        required: &[
            r"permission to use, copy, modify, and(/or)? distribute this software for any purpose with or without fee is hereby granted",
        ],
        forbidden: &[],
    },
    LicensePattern {
        id: "BSD-3-Clause",
        required: &[
            r"redistribution and use in source and binary forms",
            r"neither the name of",
        ],
        forbidden: &[r"all advertising materials"],
    },
    LicensePattern {
        id: "BSD-2-Clause",
        required: &[r"redistribution and use in source and binary forms"],
        forbidden: &[r"neither the name of", r"all advertising materials"],
    },
    LicensePattern {
        id: "GPL-2.0",
        required: &[r"gnu general public license version 2, june 1991"],
        forbidden: &[],
    },
    LicensePattern {
        id: "GPL-3.0",
        required: &[r"gnu general public license version 3, 29 june 2007"],
        forbidden: &[],
    },
    LicensePattern {
        id: "LGPL-2.1",
        required: &[r"gnu lesser general public license version 2\.1, february 1999"],
        forbidden: &[],
    },
    LicensePattern {
        id: "LGPL-3.0",
        required: &[r"gnu lesser general public license version 3, 29 june 2007"],
        forbidden: &[],
    },
    LicensePattern {
        id: "AGPL-3.0",
        required: &[r"gnu affero general public license version 3, 19 november 2007"],
        forbidden: &[],
    },
    LicensePattern {
        id: "MPL-2.0",
        required: &[r"mozilla public license,? (version |v\. ?)2\.0"],
        forbidden: &[],
    },
    LicensePattern {
        id: "Unlicense",
        required: &[r"this is free and unencumbered software released into the public domain"],
        forbidden: &[],
    },
    LicensePattern {
        id: "BSL-1.0",
        required: &[r"boost software license - version 1\.0"],
        forbidden: &[],
    },
    LicensePattern {
        id: "CC0-1.0",
        required: &[r"cc0 1\.0 universal"],
        forbidden: &[],
    },
    LicensePattern {
        id: "CC-BY-4.0",
        required: &[r"attribution 4\.0 international"],
        forbidden: &[],
    },
];

struct CompiledLicense {
    id: &'static str,
    required: Vec<Regex>,
    forbidden: Vec<Regex>,
}

impl CompiledLicense {
    fn matches(&self, text: &str) -> bool {
        self.required.iter().all(|re| re.is_match(text))
            && !self.forbidden.iter().any(|re| re.is_match(text))
    }
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("valid regex"))
        .collect()
}

/// License classifier driven by a table of well-known license phrases
///
/// An explicit `SPDX-License-Identifier:` tag wins over phrase matching.
pub struct PhraseLicenseClassifier {
    licenses: Vec<CompiledLicense>,
    spdx_tag: Regex,
}

impl PhraseLicenseClassifier {
    pub fn new() -> Self {
        let licenses = KNOWN_LICENSES
            .iter()
            .map(|pattern| CompiledLicense {
                id: pattern.id,
                required: compile(pattern.required),
                forbidden: compile(pattern.forbidden),
            })
            .collect();

        Self {
            licenses,
            spdx_tag: Regex::new(r"(?m)SPDX-License-Identifier:[ \t]*([^\r\n]+?)[ \t]*(?:\*/|-->)?[ \t]*\r?$")
                .expect("valid regex"),
        }
    }

    /// Ids of every known license whose phrases appear in `text`
    pub fn matching_ids(&self, text: &str) -> Vec<String> {
        let normalized = normalize(text);
        self.licenses
            .iter()
            .filter(|license| license.matches(&normalized))
            .map(|license| license.id.to_string())
            .collect()
    }

    fn spdx_tags(&self, text: &str) -> Vec<String> {
        let mut tags: Vec<String> = self
            .spdx_tag
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }
}

impl Default for PhraseLicenseClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LicenseClassifier for PhraseLicenseClassifier {
    fn classify(&self, text: &[u8]) -> Result<String, LicenseError> {
        let text = String::from_utf8_lossy(text);

        let tags = self.spdx_tags(&text);
        if !tags.is_empty() {
            trace!(tags = ?tags, "Found SPDX license identifier tags");
            return single_match(tags);
        }

        let ids = self.matching_ids(&text);
        trace!(matches = ?ids, "License phrase matches");
        single_match(ids)
    }
}

fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
