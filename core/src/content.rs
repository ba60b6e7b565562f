//! Static copy and asset paths. Visible text goes through the translation
//! tables; only proper names and URLs live here.

use crate::section::{SectionError, SectionRegistry};

/// Sections in page order. Each one is rendered with `id` and `data-section`.
pub const SECTIONS: [&str; 8] = [
    "home",
    "projects",
    "about",
    "recent-work",
    "process",
    "services",
    "testimonials",
    "contact",
];

pub fn section_registry() -> Result<SectionRegistry, SectionError> {
    SectionRegistry::new(SECTIONS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub section: &'static str,
    /// Translation key; `None` renders the home icon.
    pub label_key: Option<&'static str>,
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { section: "home", label_key: None },
    NavItem { section: "projects", label_key: Some("nav.projects") },
    NavItem { section: "about", label_key: Some("nav.about") },
    NavItem { section: "services", label_key: Some("nav.services") },
    NavItem { section: "testimonials", label_key: Some("nav.testimonials") },
    NavItem { section: "contact", label_key: Some("nav.contact") },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
    pub image_gray: &'static str,
    pub image_color: &'static str,
    pub emphasis: bool,
}

pub const PROJECTS: [Project; 8] = [
    Project {
        id: 1,
        title: "Digital Interface Design",
        description: "Empowering creativity through innovative digital experiences",
        href: "https://www.behance.net/gallery/123456789/project1",
        image_gray: "./placeholders/projects/project1-gray.svg",
        image_color: "./placeholders/projects/project1-color.svg",
        emphasis: false,
    },
    Project {
        id: 2,
        title: "Portrait Photography",
        description: "Professional headshot and portrait photography",
        href: "https://www.behance.net/gallery/123456790/project2",
        image_gray: "./placeholders/projects/project2-gray.svg",
        image_color: "./placeholders/projects/project2-color.svg",
        emphasis: true,
    },
    Project {
        id: 3,
        title: "PICCOLO Cold Brew",
        description: "Premium cold brew coffee packaging design",
        href: "https://www.behance.net/gallery/123456791/project3",
        image_gray: "./placeholders/projects/project3-gray.svg",
        image_color: "./placeholders/projects/project3-color.svg",
        emphasis: false,
    },
    Project {
        id: 4,
        title: "3D Logo Design",
        description: "Abstract geometric logo with 3D rendering",
        href: "https://www.behance.net/gallery/123456792/project4",
        image_gray: "./placeholders/projects/project4-gray.svg",
        image_color: "./placeholders/projects/project4-color.svg",
        emphasis: false,
    },
    Project {
        id: 5,
        title: "DISTTRAQT Storefront",
        description: "Modern retail storefront design and branding",
        href: "https://www.behance.net/gallery/123456793/project5",
        image_gray: "./placeholders/projects/project5-gray.svg",
        image_color: "./placeholders/projects/project5-color.svg",
        emphasis: false,
    },
    Project {
        id: 6,
        title: "Astral Business Cards",
        description: "Minimalist business card design system",
        href: "https://www.behance.net/gallery/123456794/project6",
        image_gray: "./placeholders/projects/project6-gray.svg",
        image_color: "./placeholders/projects/project6-color.svg",
        emphasis: false,
    },
    Project {
        id: 7,
        title: "Eco Packaging",
        description: "Sustainable packaging design for eco-friendly products",
        href: "https://www.behance.net/gallery/123456795/project7",
        image_gray: "./placeholders/projects/project7-gray.svg",
        image_color: "./placeholders/projects/project7-color.svg",
        emphasis: false,
    },
    Project {
        id: 8,
        title: "Brand Identity System",
        description: "Complete brand identity and visual system",
        href: "https://www.behance.net/gallery/123456796/project8",
        image_gray: "./placeholders/projects/project8-gray.svg",
        image_color: "./placeholders/projects/project8-color.svg",
        emphasis: false,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Review {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub rating: u8,
    pub avatar: &'static str,
}

pub const REVIEWS: [Review; 2] = [
    Review {
        id: 1,
        name: "MAAZOUZ AHMED",
        role: "MAAZOUZ EXPORT CEO",
        quote: "Adam brought real value to Maazouz Export. His creativity in design helped us present our brand in a modern, engaging way. What impressed me most was his ability to transform ideas into visuals that not only looked great but also communicated our message clearly. A talented professional I strongly recommend.",
        rating: 5,
        avatar: "/placeholders/avatars/avatar_maazouz.svg",
    },
    Review {
        id: 2,
        name: "CEO, StudyInItaly",
        role: "CEO, StudyInItaly",
        quote: "Collaborating with Adam was a game-changer for our online presence. He brought fresh creativity to our Instagram of 55K+ followers, producing videos, posts, and scripts that connected deeply with our audience. His mix of design skills and storytelling made every piece of content both engaging and effective. Truly an asset to any team.",
        rating: 5,
        avatar: "/placeholders/avatars/avatar_studyinitaly.svg",
    },
];

pub const REVIEWS_PER_VIEW: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logo {
    pub name: &'static str,
    pub src: &'static str,
}

pub const LOGOS: [Logo; 12] = [
    Logo { name: "Dune", src: "./placeholders/logos/dune.svg" },
    Logo { name: "Oasis", src: "./placeholders/logos/oasis.svg" },
    Logo { name: "PICCOLO", src: "./placeholders/logos/piccolo.svg" },
    Logo { name: "BAND", src: "./placeholders/logos/band.svg" },
    Logo { name: "TechFlow", src: "./placeholders/logos/techflow.svg" },
    Logo { name: "GreenRoots", src: "./placeholders/logos/greenroots.svg" },
    Logo { name: "EcoLux", src: "./placeholders/logos/ecolux.svg" },
    Logo { name: "Artisan Co", src: "./placeholders/logos/artisan.svg" },
    Logo { name: "InnovateLab", src: "./placeholders/logos/innovatelab.svg" },
    Logo { name: "Astral", src: "./placeholders/logos/astral.svg" },
    Logo { name: "DISTTRAQT", src: "./placeholders/logos/disttraqt.svg" },
    Logo { name: "UrbanFit", src: "./placeholders/logos/urbanfit.svg" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label_key: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat { value: 96, suffix: "%", label_key: "stats.satisfaction" },
    Stat { value: 100, suffix: "+", label_key: "stats.projects" },
    Stat { value: 5, suffix: "+", label_key: "stats.years" },
];

/// Delay between consecutive stat counters.
pub const STAT_STAGGER_MS: f64 = 200.0;

pub const SERVICE_KEYS: [&str; 12] = [
    "services.brandIdentity",
    "services.logoDesign",
    "services.packaging",
    "services.webDesign",
    "services.printDesign",
    "services.socialMedia",
    "services.uiUxDesign",
    "services.illustration",
    "services.consulting",
    "services.ecommerce",
    "services.photography",
    "services.animation",
];

pub const PROCESS_STEPS: [&str; 3] = ["process.step1", "process.step2", "process.step3"];

pub const SKILL_KEYS: [&str; 11] = [
    "about.skills.brandIdentity",
    "about.skills.packagingDesign",
    "about.skills.socialMediaDesign",
    "about.skills.productPhotography",
    "about.skills.contentCreation",
    "about.skills.videoEditing",
    "about.skills.photoshop",
    "about.skills.illustrator",
    "about.skills.premierePro",
    "about.skills.capcut",
    "about.skills.canva",
];

pub const EXPERIENCE_KEYS: [&str; 3] = [
    "about.experience.freelance",
    "about.experience.socialMediaDesigner",
    "about.experience.productPhotographer",
];

pub const FAQ_KEYS: [&str; 6] = ["faq.q1", "faq.q2", "faq.q3", "faq.q4", "faq.q5", "faq.q6"];

pub const PORTRAIT: &str = "./placeholders/portrait.webp";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Language, Translations};

    #[test]
    fn registry_builds_from_sections() {
        let registry = section_registry().unwrap();
        assert_eq!(registry.len(), SECTIONS.len());
    }

    #[test]
    fn nav_items_point_at_registered_sections() {
        let registry = section_registry().unwrap();
        for item in NAV_ITEMS {
            assert!(registry.resolve(item.section).is_some(), "{}", item.section);
        }
    }

    #[test]
    fn every_content_key_is_translated() {
        let translations = Translations::embedded().unwrap();
        let mut keys: Vec<String> = Vec::new();
        keys.extend(NAV_ITEMS.iter().filter_map(|i| i.label_key).map(String::from));
        keys.extend(STATS.iter().map(|s| s.label_key.to_string()));
        keys.extend(SERVICE_KEYS.iter().map(|k| k.to_string()));
        keys.extend(SKILL_KEYS.iter().map(|k| k.to_string()));
        for step in PROCESS_STEPS {
            keys.push(format!("{step}.title"));
            keys.push(format!("{step}.description"));
        }
        for entry in EXPERIENCE_KEYS {
            keys.push(format!("{entry}.role"));
            keys.push(format!("{entry}.company"));
            keys.push(format!("{entry}.period"));
        }
        for faq in FAQ_KEYS {
            keys.push(format!("{faq}.question"));
            keys.push(format!("{faq}.answer"));
        }
        for language in [Language::English, Language::German] {
            for key in &keys {
                assert!(
                    translations.lookup(language, key).is_some(),
                    "{} is missing {key}",
                    language.code()
                );
            }
        }
    }

    #[test]
    fn project_ids_are_unique() {
        let mut ids: Vec<u32> = PROJECTS.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
    }
}
