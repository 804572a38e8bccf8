use lazy_static::lazy_static;

/// One titled block inside a category pane. `body` is trusted static
/// markup (line breaks as `<br/>`) rendered verbatim; nothing dynamic
/// may ever be routed through it.
pub struct InfoEntry {
    pub title: &'static str,
    pub body: &'static str,
}

impl InfoEntry {
    const fn new(title: &'static str, body: &'static str) -> InfoEntry {
        InfoEntry { title, body }
    }
}

/// A fixed section of the portal: tab label, pane heading and its blocks.
pub struct InfoCategory {
    pub key: &'static str,
    pub label: &'static str,
    pub title: &'static str,
    pub entries: Vec<InfoEntry>,
}

lazy_static! {
    /// The whole portal catalog, in tab order. Built once at startup and
    /// never mutated.
    pub static ref CATEGORIES: Vec<InfoCategory> = vec![
        InfoCategory {
            key: "schedules",
            label: "📅 Schedules",
            title: "Academic Schedules",
            entries: vec![
                InfoEntry::new(
                    "Fall 2024 Semester",
                    "Classes: Aug 28 - Dec 15<br/>Midterms: Oct 14-18<br/>Finals: Dec 11-15<br/>Registration opens: April 1",
                ),
                InfoEntry::new(
                    "Spring 2025 Semester",
                    "Classes: Jan 15 - May 10<br/>Spring Break: Mar 10-14<br/>Finals: May 6-10<br/>Registration opens: Nov 1",
                ),
                InfoEntry::new(
                    "Summer Sessions",
                    "Session I: May 27 - Jul 3<br/>Session II: Jul 7 - Aug 14<br/>Full Summer: May 27 - Aug 14",
                ),
            ],
        },
        InfoCategory {
            key: "facilities",
            label: "🏢 Facilities",
            title: "Campus Facilities",
            entries: vec![
                InfoEntry::new(
                    "Recreation Center",
                    "Hours: Mon-Fri 6am-11pm, Sat-Sun 8am-10pm<br/>Features: Pool, gym, courts, climbing wall<br/>Student ID required",
                ),
                InfoEntry::new(
                    "Student Union",
                    "Hours: Mon-Thu 7am-12am, Fri 7am-2am, Sat 9am-2am, Sun 9am-12am<br/>Services: Food court, bookstore, study spaces",
                ),
                InfoEntry::new(
                    "Computer Labs",
                    "24/7 access with student ID<br/>Locations: Library, Engineering Building, Student Center<br/>Software: Office, Adobe Creative Suite, programming tools",
                ),
            ],
        },
        InfoCategory {
            key: "events",
            label: "🎉 Events",
            title: "Campus Events",
            entries: vec![
                InfoEntry::new(
                    "This Week's Highlights",
                    "Mon: Career Fair (Student Union, 10am-4pm)<br/>Wed: Guest Lecture - AI in Healthcare (Auditorium, 7pm)<br/>Fri: Movie Night - Outdoor Cinema (Quad, 8pm)",
                ),
                InfoEntry::new(
                    "Upcoming Festivals",
                    "Cultural Diversity Week: Oct 15-21<br/>Homecoming: Nov 2-5<br/>Spring Arts Festival: Mar 20-25",
                ),
                InfoEntry::new(
                    "Student Organizations",
                    "Over 200 active clubs<br/>Weekly club fair: Wednesdays 12-2pm<br/>Leadership workshops monthly",
                ),
            ],
        },
        InfoCategory {
            key: "dining",
            label: "🍽️ Dining",
            title: "Dining Services",
            entries: vec![
                InfoEntry::new(
                    "Main Cafeteria",
                    "Hours: 7am-9pm daily<br/>All-you-can-eat meal plans<br/>Special diets accommodated<br/>Location: Student Union Ground Floor",
                ),
                InfoEntry::new(
                    "Food Court Options",
                    "Pizza Station, Asian Express, Grill & Go, Salad Bar<br/>Hours: 11am-8pm<br/>Accepts dining dollars and cash",
                ),
                InfoEntry::new(
                    "Campus Cafés",
                    "Library Café: 24/7 (vending only after 11pm)<br/>Science Building Café: 8am-4pm<br/>Grab-and-go options available",
                ),
            ],
        },
        InfoCategory {
            key: "library",
            label: "📚 Library",
            title: "Library Resources",
            entries: vec![
                InfoEntry::new(
                    "Operating Hours",
                    "Mon-Thu: 7am-2am<br/>Fri: 7am-10pm<br/>Sat: 9am-10pm<br/>Sun: 10am-2am<br/>24/7 during finals week",
                ),
                InfoEntry::new(
                    "Study Spaces",
                    "Silent study floors: 3rd & 4th<br/>Group study rooms: Reservable online<br/>24-hour study lounge: Ground floor<br/>Graduate carrels available",
                ),
                InfoEntry::new(
                    "Research Support",
                    "Librarian consultations by appointment<br/>Research workshops weekly<br/>Interlibrary loan services<br/>Digital archives access",
                ),
            ],
        },
        InfoCategory {
            key: "admin",
            label: "📋 Admin",
            title: "Administrative Services",
            entries: vec![
                InfoEntry::new(
                    "Registrar's Office",
                    "Hours: Mon-Fri 8am-5pm<br/>Services: Transcripts, enrollment verification, degree audits<br/>Online services available 24/7",
                ),
                InfoEntry::new(
                    "Financial Aid",
                    "Walk-in hours: Mon-Fri 9am-4pm<br/>FAFSA assistance available<br/>Scholarship database online<br/>Payment plans offered",
                ),
                InfoEntry::new(
                    "Student Services",
                    "Counseling Center: Mon-Fri 8am-6pm<br/>Health Services: Mon-Fri 8am-5pm<br/>Career Services: Appointments & walk-ins",
                ),
            ],
        },
    ];
}

pub fn find(key: &str) -> Option<&'static InfoCategory> {
    CATEGORIES.iter().find(|category| category.key == key)
}

pub fn default_category() -> &'static InfoCategory {
    &CATEGORIES[0]
}

/// Which category pane is open. Nothing more to it than a pointer into
/// the catalog; the catalog itself never changes.
pub struct CategoryBrowser {
    selected: &'static InfoCategory,
}

impl CategoryBrowser {
    pub fn new() -> CategoryBrowser {
        CategoryBrowser {
            selected: default_category(),
        }
    }

    /// Switches panes. Keys outside the fixed set leave the selection as
    /// it was.
    pub fn select(&mut self, key: &str) {
        if let Some(category) = find(key) {
            self.selected = category;
        }
    }

    pub fn selected(&self) -> &'static InfoCategory {
        self.selected
    }
}

impl Default for CategoryBrowser {
    fn default() -> CategoryBrowser {
        CategoryBrowser::new()
    }
}
