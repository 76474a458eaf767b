//! Fixed site content.
//!
//! Every page is a [`Page`]: the shared [`Profile`], a title, the active tab
//! and a page-specific [`PageBody`]. `Page` serializes to the flat content map
//! a template would consume (`title`, `active_tab`, `profile`, body keys).

use serde::Serialize;

use portfolio_types::TimelinePost;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageId {
    Index,
    About,
    Work,
    Education,
    Hobbies,
    WhereAmI,
    Timeline,
}

impl PageId {
    /// Navigation order.
    pub const ALL: [PageId; 7] = [
        PageId::Index,
        PageId::About,
        PageId::Work,
        PageId::Education,
        PageId::Hobbies,
        PageId::WhereAmI,
        PageId::Timeline,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::About => "about",
            Self::Work => "work",
            Self::Education => "education",
            Self::Hobbies => "hobbies",
            Self::WhereAmI => "where_am_i",
            Self::Timeline => "timeline",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Index => "Home",
            Self::About => "About",
            Self::Work => "Work Experiences",
            Self::Education => "Education",
            Self::Hobbies => "Hobbies",
            Self::WhereAmI => "Where am I",
            Self::Timeline => "Timeline",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Index => "/",
            Self::About => "/about",
            Self::Work => "/work",
            Self::Education => "/education",
            Self::Hobbies => "/hobbies",
            Self::WhereAmI => "/where_am_i",
            Self::Timeline => "/timeline",
        }
    }
}

// -- Profile --

#[derive(Debug, Clone, Serialize)]
pub struct Social {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

/// Owner details shown in the header of every page.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub position: &'static str,
    pub url: String,
    pub socials: Vec<Social>,
}

impl Profile {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            name: "Ailun Yu",
            position: "Software Engineer",
            url: url.into(),
            socials: vec![
                Social {
                    name: "Github",
                    url: "https://github.com/Kismet-Fate",
                    icon: "./static/img/social/github.svg",
                },
                Social {
                    name: "LinkedIn",
                    url: "https://www.linkedin.com/in/ailun-yu-b1865a21b/",
                    icon: "./static/img/social/linkedin.svg",
                },
            ],
        }
    }
}

// -- Page bodies --

#[derive(Debug, Clone, Serialize)]
pub struct Job {
    pub name: &'static str,
    pub location: &'static str,
    pub contact: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct School {
    pub school: &'static str,
    pub degree: &'static str,
    pub major: Option<&'static str>,
    pub years: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hobby {
    pub name: &'static str,
    pub img: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Place {
    pub name: &'static str,
    pub description: &'static str,
    /// Latitude, longitude.
    pub coords: [f64; 2],
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PageBody {
    Home {},
    About { quote: &'static str, author: &'static str },
    Work { jobs: Vec<Job> },
    Education { educations: Vec<School> },
    Hobbies { hobbies: Vec<Hobby> },
    WhereAmI { places: Vec<Place> },
    Timeline { timeline_posts: Vec<TimelinePost> },
}

#[derive(Debug, Serialize)]
pub struct Page<'a> {
    pub title: String,
    #[serde(rename = "active_tab")]
    pub id: PageId,
    pub profile: &'a Profile,
    #[serde(flatten)]
    pub body: PageBody,
}

impl<'a> Page<'a> {
    pub fn new(id: PageId, profile: &'a Profile, body: PageBody) -> Self {
        Self {
            title: format!("{} - Portfolio", id.label()),
            id,
            profile,
            body,
        }
    }
}

pub fn home() -> PageBody {
    PageBody::Home {}
}

pub fn about() -> PageBody {
    PageBody::About {
        quote: "Only one who devotes himself to a cause with his whole strength and soul can be a true master. For this reason mastery demands all of a person.",
        author: "Albert Einstein",
    }
}

pub fn work() -> PageBody {
    PageBody::Work {
        jobs: vec![
            Job {
                name: "Theoretical physicist",
                location: "Mars",
                contact: "1 (202) 358-0001",
                description: "They wanted someone with a degree in theoretical physics and I said I have a theoretical physic degree and they let me in.",
            },
            Job {
                name: "Computer programmer",
                location: "Memory Lane",
                contact: "127.255.255.255",
                description: "Today I walked down a street where many computer programmers live. The houses were numbered 64k, 128k, 256k, 512k and 1MB. For some reason it felt like a trip down memory lane.",
            },
        ],
    }
}

pub fn education() -> PageBody {
    PageBody::Education {
        educations: vec![
            School {
                school: "Stony Brook University",
                degree: "Bachelor of Science",
                major: Some("Computer Science"),
                years: "2020 - 2024",
            },
            School {
                school: "Bethpage High School",
                degree: "High School Diploma",
                major: None,
                years: "2016 - 2020",
            },
        ],
    }
}

pub fn hobbies() -> PageBody {
    PageBody::Hobbies {
        hobbies: vec![
            Hobby {
                name: "Badminton",
                img: "https://cdn.shopify.com/s/files/1/0020/9407/1890/files/2_480x480.jpg?v=1559302854",
                desc: "I've been playing badminton ever since I was a little kid. I've played at all collegiate levels and have multiple competitive accomplishments in the sport.",
            },
            Hobby {
                name: "Chess",
                img: "https://images.ctfassets.net/3s5io6mnxfqz/wfAz3zUBbrcf1eSMLZi8u/c03ac28c778813bd72373644ee8b8b02/AdobeStock_364059453.jpeg?fm=jpg&w=900&fl=progressive",
                desc: "I've been playing chess since I was a little kid. I've played at all collegiate levels and have multiple competitve accomplishments in the sport.",
            },
            Hobby {
                name: "Bouldering",
                img: "https://a2cf4fa39d1096849525-c9e74d9e365a688b9dfb3e01b6ac4867.ssl.cf5.rackcdn.com/cloud_images/Climber-at-bouldering-gym.jpg",
                desc: "One of my favorite pastimes is bouldering. It's a great way to exercise while solving problems with other people. I plan on bouldering even more next year.",
            },
            Hobby {
                name: "Cycling",
                img: "https://hips.hearstapps.com/hmg-prod.s3.amazonaws.com/images/mff-roka-0618-1-preview-maxwidth-3000-maxheight-3000-ppi-300-quality-90-1620433208.jpg?crop=1.00xw:0.750xh;0,0.190xh&resize=1200:*",
                desc: "I'm an amateur cyclist and part of my local cycling club. I enjoy exploring new routes every weekend and getting new PRs on my Strava.",
            },
        ],
    }
}

pub fn places() -> PageBody {
    PageBody::WhereAmI {
        places: vec![
            Place {
                name: "Stonybrook",
                description: "I am currently living in Stonybrook, New York",
                coords: [37.75, -122.4],
            },
            Place {
                name: "Edmonton",
                description: "Capital of the texas of Canada",
                coords: [53.0, -113.0],
            },
            Place {
                name: "Seattle",
                description: "The seat of King County, Washington",
                coords: [47.0, -120.0],
            },
            Place {
                name: "San Juan",
                description: "Unincorporated territory of the United States",
                coords: [18.0, -66.0],
            },
        ],
    }
}
