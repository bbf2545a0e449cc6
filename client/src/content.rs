//! Static page copy: navigation targets, course modules, testimonials, and
//! contact details.
//!
//! DESIGN
//! ======
//! Copy is compiled in as `const` tables so components stay purely
//! presentational and the tables can be checked by unit tests.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const SITE_NAME: &str = "First Principles Education";
pub const SITE_DESCRIPTION: &str =
    "Blending modern insights with ancient wisdom to create lasting personal change.";
pub const BOOK_CONSULTATION: &str = "Book consultation";

/// Anchored page sections, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    Course,
    Contact,
    About,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Home, Section::Course, Section::Contact, Section::About];

    /// Element id of the section.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Course => "course",
            Section::Contact => "contact",
            Section::About => "about",
        }
    }

    /// In-page anchor pointing at the section.
    pub fn href(self) -> &'static str {
        match self {
            Section::Home => "#home",
            Section::Course => "#course",
            Section::Contact => "#contact",
            Section::About => "#about",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub section: Section,
    pub label: &'static str,
}

/// Header and footer navigation, in display order.
pub const NAV_LINKS: [NavItem; 3] = [
    NavItem { section: Section::About, label: "About" },
    NavItem { section: Section::Course, label: "Course" },
    NavItem { section: Section::Contact, label: "Contact" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CourseModule {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const COURSE_TITLE: &str = "The Compass Within";

pub const COURSE_MODULES: [CourseModule; 6] = [
    CourseModule {
        number: "01",
        title: "Living Intentionally",
        description: "Practice the process of building value-aligned personal visions and motivations.",
    },
    CourseModule {
        number: "02",
        title: "Transcending Impulsivity",
        description: "Distil visions into concrete goals and key actions to create focus.",
    },
    CourseModule {
        number: "03",
        title: "Automating Success",
        description: "Use scientific strategies to build and break habits for consistent action.",
    },
    CourseModule {
        number: "04",
        title: "Training The Mind",
        description: "Recognise and replace limiting beliefs and patterns of negative self-talk.",
    },
    CourseModule {
        number: "05",
        title: "Breaking Cycles",
        description: "Disrupt avoidant and self-destructive cycles with reflection, mindfulness, self-compassion and direct action.",
    },
    CourseModule {
        number: "06",
        title: "Being Present",
        description: "Lay the foundations for lifelong presence through mindfulness and meditation practices.",
    },
];

pub const INCLUDED_ITEMS: [&str; 3] = [
    "Six life\u{2011}changing modules",
    "Extensive weekly notes",
    "20+ guided exercises",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub school: Option<&'static str>,
}

impl Testimonial {
    /// Stable list key: the name followed by the first 12 characters of the quote.
    pub fn key(&self) -> String {
        let prefix: String = self.quote.chars().take(12).collect();
        format!("{}{prefix}", self.name)
    }
}

const CRANBROOK: Option<&str> = Some("Cranbrook School");

pub const TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        quote: "Every single topic significantly changed my life. I now have a genuine realistic schedule, I am able to feel happy and have good sleep. I have come out of this dopamine and pleasure trap of cyclical patterns and now genuinely feel purely happy for the first time in my life. I feel in the present, I stopped watching porn, I have a clean room and I feel energised. I genuinely feel energised.",
        name: "Anonymous",
        school: CRANBROOK,
    },
    Testimonial {
        quote: "I learned how to solve problems within my life and direct myself towards a person I want to be. It has also helped me be a better friend and brother for my close ones.",
        name: "Noah",
        school: CRANBROOK,
    },
    Testimonial {
        quote: "Eye opening and engaging course that will steer you back on track no matter how far off it you are.",
        name: "Hugo",
        school: CRANBROOK,
    },
    Testimonial {
        quote: "Honestly made me understand how to become a better person, being kind not just to others but also myself.",
        name: "Thomas",
        school: CRANBROOK,
    },
    Testimonial {
        quote: "Screen time lowered.",
        name: "Anonymous",
        school: CRANBROOK,
    },
];

pub const ABOUT_VIDEO_URL: &str = "https://www.youtube.com/embed/cl93xw5F3cI?start=4";
pub const ABOUT_VIDEO_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

pub const CONTACT_EMAIL: &str = "hello@firstprinciples.education";
pub const CONTACT_HOURS: &str = "Mon\u{2013}Fri, 9am\u{2013}5pm";
