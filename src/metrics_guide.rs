//! Reference definitions of the SEO metrics shown in analysis reports.
//!
//! The table is compiled in and never changes at runtime. It renders as a
//! plain-text guide and serializes to the nested `category -> metric -> fields`
//! JSON object the tooltip layer reads.
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

const GUIDE_TITLE: &str = "SEO Metrics Guide";
const GUIDE_INTRO: &str = "This guide explains the SEO metrics used in this report. \
Each metric includes a description, what constitutes good and bad values, \
and why it matters for your website's SEO performance.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    Excellent,
    Good,
    Warning,
    Poor,
    Bad,
    Critical,
}

impl Band {
    pub fn as_str(&self) -> &'static str {
        match self {
            Band::Excellent => "excellent",
            Band::Good => "good",
            Band::Warning => "warning",
            Band::Poor => "poor",
            Band::Bad => "bad",
            Band::Critical => "critical",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Band::Excellent => "Excellent Value:",
            Band::Good => "Good Value:",
            Band::Warning => "Warning Value:",
            Band::Poor => "Poor Value:",
            Band::Bad => "Bad Value:",
            Band::Critical => "Critical Value:",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct MetricDefinition {
    pub name: &'static str,
    pub description: &'static str,
    /// Ordered from best to worst. Each metric uses its own subset of bands.
    pub thresholds: &'static [(Band, &'static str)],
    pub why: &'static str,
    pub creation_info: Option<&'static str>,
    pub auto_creation: Option<&'static str>,
}

impl MetricDefinition {
    pub fn threshold(&self, band: Band) -> Option<&'static str> {
        self.thresholds
            .iter()
            .find(|(b, _)| *b == band)
            .map(|(_, label)| *label)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub metrics: &'static [MetricDefinition],
}

impl Category {
    pub fn metric(&self, name: &str) -> Option<&'static MetricDefinition> {
        self.metrics.iter().find(|m| m.name == name)
    }
}

#[derive(Debug)]
pub struct MetricsGuide {
    categories: &'static [Category],
}

impl MetricsGuide {
    pub fn categories(&self) -> impl Iterator<Item = &'static Category> {
        self.categories.iter()
    }

    pub fn category(&self, name: &str) -> Option<&'static Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Exact, case-sensitive lookup. Unknown pairs yield `None`.
    pub fn get(&self, category: &str, metric: &str) -> Option<&'static MetricDefinition> {
        self.category(category)?.metric(metric)
    }

    pub fn render_guide(&self) -> String {
        self.to_string()
    }
}

const LABEL_WIDTH: usize = 17;

fn write_row(f: &mut fmt::Formatter<'_>, label: &str, value: &str) -> fmt::Result {
    writeln!(f, "{:<width$}{}", label, value, width = LABEL_WIDTH)
}

impl fmt::Display for MetricDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-- {} --", self.name)?;
        write_row(f, "Description:", self.description)?;
        for (band, label) in self.thresholds {
            write_row(f, band.label(), label)?;
        }
        write_row(f, "Why it Matters:", self.why)?;
        if let Some(creation_info) = self.creation_info {
            write_row(f, "Creation Info:", creation_info)?;
        }
        if let Some(auto_creation) = self.auto_creation {
            write_row(f, "Auto Creation:", auto_creation)?;
        }
        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.name)?;
        for metric in self.metrics {
            writeln!(f)?;
            write!(f, "{}", metric)?;
        }
        Ok(())
    }
}

impl fmt::Display for MetricsGuide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", GUIDE_TITLE)?;
        writeln!(f)?;
        writeln!(f, "{}", GUIDE_INTRO)?;
        for category in self.categories {
            writeln!(f)?;
            write!(f, "{}", category)?;
        }
        Ok(())
    }
}

impl Serialize for MetricDefinition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("description", self.description)?;
        for (band, label) in self.thresholds {
            map.serialize_entry(band.as_str(), label)?;
        }
        map.serialize_entry("why", self.why)?;
        if let Some(creation_info) = self.creation_info {
            map.serialize_entry("creation_info", creation_info)?;
        }
        if let Some(auto_creation) = self.auto_creation {
            map.serialize_entry("auto_creation", auto_creation)?;
        }
        map.end()
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.metrics.len()))?;
        for metric in self.metrics {
            map.serialize_entry(metric.name, metric)?;
        }
        map.end()
    }
}

impl Serialize for MetricsGuide {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in self.categories {
            map.serialize_entry(category.name, category)?;
        }
        map.end()
    }
}

const fn metric(
    name: &'static str,
    description: &'static str,
    thresholds: &'static [(Band, &'static str)],
    why: &'static str,
) -> MetricDefinition {
    MetricDefinition {
        name,
        description,
        thresholds,
        why,
        creation_info: None,
        auto_creation: None,
    }
}

pub static METRICS_GUIDE: MetricsGuide = MetricsGuide {
    categories: &[
        Category {
            name: "Technical SEO",
            metrics: &[
                metric(
                    "Load Time",
                    "The time it takes for your page to fully load.",
                    &[
                        (Band::Excellent, "Under 1 second"),
                        (Band::Good, "1-2 seconds"),
                        (Band::Warning, "2-3 seconds"),
                        (Band::Poor, "3-5 seconds"),
                        (Band::Critical, "Over 5 seconds"),
                    ],
                    "Faster loading times improve user experience and SEO rankings. \
                     Google considers page speed as a ranking factor. \
                     Modern users expect pages to load almost instantly. \
                     Performance ratings: Excellent (<1s) - Instant loading, ideal for user engagement; \
                     Good (1-2s) - Fast loading, good user experience; \
                     Warning (2-3s) - Acceptable but could be improved; \
                     Poor (3-5s) - Slow loading, impacts user experience; \
                     Critical (>5s) - Very slow, needs immediate optimization.",
                ),
                metric(
                    "Mobile Friendly",
                    "Whether your site works well on mobile devices.",
                    &[(Band::Good, "Yes"), (Band::Bad, "No")],
                    "Most web traffic comes from mobile devices. Google prioritizes mobile-friendly sites.",
                ),
                metric(
                    "SSL Certificate",
                    "Security certificate that enables HTTPS.",
                    &[
                        (Band::Good, "Valid SSL certificate"),
                        (Band::Bad, "No SSL or expired"),
                    ],
                    "HTTPS is required for security and is a ranking factor for Google.",
                ),
                MetricDefinition {
                    creation_info: Some(
                        "If missing, we can help create a robots.txt file with recommended settings.",
                    ),
                    auto_creation: Some(
                        "The tool can attempt to create a robots.txt file automatically, \
                         or provide you with the content to create it manually.",
                    ),
                    ..metric(
                        "Robots.txt",
                        "File that guides search engine crawlers.",
                        &[
                            (Band::Good, "Present and properly configured"),
                            (Band::Warning, "Present but needs optimization"),
                            (Band::Bad, "Missing or blocking important content"),
                        ],
                        "Helps search engines understand which pages to index.",
                    )
                },
                MetricDefinition {
                    creation_info: Some(
                        "If missing, we can generate a sitemap.xml based on your site's structure.",
                    ),
                    auto_creation: Some(
                        "The tool can attempt to create a sitemap.xml file automatically, \
                         or provide you with the content to create it manually.",
                    ),
                    ..metric(
                        "Sitemap.xml",
                        "XML file listing all important pages on your site.",
                        &[
                            (Band::Good, "Present and valid XML format"),
                            (Band::Warning, "Present but invalid format"),
                            (Band::Bad, "Missing"),
                        ],
                        "Helps search engines discover and index all your pages efficiently.",
                    )
                },
            ],
        },
        Category {
            name: "On-Page SEO",
            metrics: &[
                metric(
                    "Title Tag",
                    "The main title of your webpage.",
                    &[
                        (Band::Good, "50-60 characters, includes main keyword"),
                        (Band::Warning, "Too long/short or missing keyword"),
                        (Band::Bad, "Missing or duplicate"),
                    ],
                    "One of the most important SEO elements for ranking.",
                ),
                metric(
                    "Meta Description",
                    "Summary of your page content.",
                    &[
                        (Band::Good, "150-160 characters, compelling description with keywords"),
                        (Band::Warning, "Too long/short or missing keywords"),
                        (Band::Bad, "Missing or duplicate"),
                    ],
                    "Affects click-through rates from search results.",
                ),
                metric(
                    "Header Tags",
                    "Hierarchical structure of page headings (H1-H6).",
                    &[
                        (Band::Good, "Proper hierarchy, includes keywords"),
                        (Band::Warning, "Improper structure"),
                        (Band::Bad, "Missing or multiple H1s"),
                    ],
                    "Helps search engines understand content structure.",
                ),
            ],
        },
        Category {
            name: "Content SEO",
            metrics: &[
                metric(
                    "Word Count",
                    "Total number of words on the page.",
                    &[
                        (Band::Good, "Over 1000 words for main content"),
                        (Band::Warning, "300-1000 words"),
                        (Band::Bad, "Under 300 words"),
                    ],
                    "Longer, quality content tends to rank better.",
                ),
                metric(
                    "Keyword Density",
                    "Frequency of keyword usage in content.",
                    &[
                        (Band::Good, "1-3%"),
                        (Band::Warning, "3-5%"),
                        (Band::Bad, "Over 5% (keyword stuffing)"),
                    ],
                    "Natural keyword usage helps rankings without being spammy.",
                ),
                metric(
                    "Content Quality",
                    "Overall content value and readability.",
                    &[
                        (Band::Good, "Original, well-structured, error-free"),
                        (Band::Warning, "Some issues with structure/errors"),
                        (Band::Bad, "Duplicate/thin content, many errors"),
                    ],
                    "High-quality content is essential for rankings and user engagement.",
                ),
            ],
        },
        Category {
            name: "User Experience",
            metrics: &[
                metric(
                    "Mobile Viewport",
                    "How well content adapts to different screen sizes.",
                    &[
                        (Band::Good, "Properly configured viewport"),
                        (Band::Bad, "No viewport or improper configuration"),
                    ],
                    "Essential for mobile usability and rankings.",
                ),
                metric(
                    "Font Size",
                    "Text readability on different devices.",
                    &[
                        (Band::Good, "16px or larger for body text"),
                        (Band::Warning, "12-15px"),
                        (Band::Bad, "Under 12px"),
                    ],
                    "Readable text improves user experience and reduces bounce rates.",
                ),
                metric(
                    "Tap Targets",
                    "Size and spacing of clickable elements.",
                    &[
                        (Band::Good, "At least 48x48px with adequate spacing"),
                        (Band::Warning, "Some targets too small/close"),
                        (Band::Bad, "Many small/crowded targets"),
                    ],
                    "Proper sizing ensures good mobile usability.",
                ),
            ],
        },
        Category {
            name: "Security",
            metrics: &[
                metric(
                    "HTTPS",
                    "Secure connection protocol.",
                    &[
                        (Band::Good, "HTTPS enabled and properly configured"),
                        (Band::Bad, "No HTTPS or misconfigured"),
                    ],
                    "Required for security and SEO ranking.",
                ),
                metric(
                    "Mixed Content",
                    "Mixing secure and insecure content.",
                    &[
                        (Band::Good, "No mixed content"),
                        (Band::Warning, "Some passive mixed content"),
                        (Band::Bad, "Active mixed content"),
                    ],
                    "Mixed content can cause security warnings and affect user trust.",
                ),
            ],
        },
        Category {
            name: "Schema Markup",
            metrics: &[metric(
                "Implementation",
                "Structured data for search engines.",
                &[
                    (Band::Good, "Properly implemented relevant schemas"),
                    (Band::Warning, "Partial implementation"),
                    (Band::Bad, "Missing or invalid schema"),
                ],
                "Helps search engines understand content and enables rich results.",
            )],
        },
        Category {
            name: "Speed Insights",
            metrics: &[
                metric(
                    "Performance Score",
                    "Overall loading performance score.",
                    &[
                        (Band::Good, "90-100"),
                        (Band::Warning, "50-89"),
                        (Band::Bad, "0-49"),
                    ],
                    "Page speed is a ranking factor and affects user experience.",
                ),
                metric(
                    "First Contentful Paint",
                    "Time until first content appears.",
                    &[
                        (Band::Good, "Under 1.8s"),
                        (Band::Warning, "1.8-3s"),
                        (Band::Bad, "Over 3s"),
                    ],
                    "Affects perceived load speed and user experience.",
                ),
            ],
        },
        Category {
            name: "Ranking Analysis",
            metrics: &[
                metric(
                    "Google Index Status",
                    "Whether your site is indexed in Google's search results.",
                    &[(Band::Good, "Indexed"), (Band::Bad, "Not indexed")],
                    "Being indexed is essential for appearing in search results.",
                ),
                metric(
                    "Domain Authority",
                    "Moz's prediction of how well a website will rank on search engines.",
                    &[
                        (Band::Good, "Above 50"),
                        (Band::Warning, "20-50"),
                        (Band::Bad, "Below 20"),
                    ],
                    "Higher domain authority typically correlates with better search rankings.",
                ),
                metric(
                    "Page Authority",
                    "Prediction of how well a specific page will rank.",
                    &[
                        (Band::Good, "Above 40"),
                        (Band::Warning, "20-40"),
                        (Band::Bad, "Below 20"),
                    ],
                    "Higher page authority indicates better potential for ranking in search results.",
                ),
                metric(
                    "Social Signals",
                    "Presence and activity on major social media platforms.",
                    &[
                        (Band::Good, "Active presence on multiple platforms"),
                        (Band::Warning, "Limited social presence"),
                        (Band::Bad, "No social presence"),
                    ],
                    "Social signals can indirectly influence rankings and drive traffic.",
                ),
                metric(
                    "Traffic Estimates",
                    "Estimated monthly website traffic.",
                    &[
                        (Band::Good, "Increasing trend"),
                        (Band::Warning, "Stable"),
                        (Band::Bad, "Decreasing trend"),
                    ],
                    "Traffic trends can indicate site health and content effectiveness.",
                ),
            ],
        },
    ],
};
