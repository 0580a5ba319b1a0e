//! Talks and interviews published on the site.

use crate::domain::Video;

/// Built-in entries, in display order
pub(crate) fn videos() -> Vec<Video> {
    vec![
        Video::talk(
            "Build gen AI features powered by your data with Firebase and PostgreSQL",
            "2024-05-16",
            "https://www.youtube.com/watch?v=D5qxlu3A9D4",
        )
        .at("Google I/O '24")
        .with_tags([
            "firebase",
            "ai",
            "postgresql",
            "data-connect",
            "genkit",
            "app-hosting",
        ]),
        Video::talk(
            "What does it mean to create API products at scale?",
            "2022-05-05",
            "https://www.youtube.com/watch?v=-6IinBFPKn4",
        )
        .at("DevX Conf '22")
        .with_tags(["firebase", "apis"]),
        Video::talk(
            "Accelerate app development with Firebase Extensions",
            "2019-09-26",
            "https://www.youtube.com/watch?v=DkXtV-XzYOQ",
        )
        .at("Firebase Summit '19")
        .with_tag("firebase"),
        Video::talk(
            "Architecting Mobile Web Apps",
            "2019-05-09",
            "https://www.youtube.com/watch?v=NwY6jkohseg",
        )
        .at("Google I/O '19")
        .with_tags(["web", "firebase", "performance"]),
        Video::talk(
            "What's possible with Cloud Functions for Firebase",
            "2017-05-18",
            "https://www.youtube.com/watch?v=G-MBeEW92v4",
        )
        .at("Google I/O '18")
        .with_tags(["firebase", "serverless"]),
        Video::interview(
            "#MeetFirebase (Part 2)",
            "2018-04-17",
            "https://www.youtube.com/watch?v=Ab6_o94xup4",
        )
        .with_tags(["firebase", "personal"]),
        Video::interview(
            "#MeetFirebase (Part 1)",
            "2018-04-16",
            "https://www.youtube.com/watch?v=akzfaXNPids",
        )
        .with_tags(["personal", "firebase"]),
        Video::talk(
            "Build Modern Apps with Firebase and Google Cloud Platform",
            "2017-05-17",
            "https://www.youtube.com/watch?v=ZIe0Fn9OtnY",
        )
        .at("Google I/O '17")
        .with_tag("firebase"),
        Video::talk(
            "Polymer Butter and Firebase Jelly",
            "2016-10-17",
            "https://www.youtube.com/watch?v=f7ODNJKh3Yg",
        )
        .at("Polymer Summit '16")
        .with_tags(["firebase", "web", "polymer"]),
        Video::talk(
            "Static Web Architecture: Not Just for Hipsters",
            "2014-04-24",
            "https://www.youtube.com/watch?v=COcuo6VH_0I",
        )
        .at("JS.LA Apr'14")
        .with_tag("web"),
        Video::talk(
            "Building modular, scalable web apps? of CORS!",
            "2012-11-11",
            "https://www.youtube.com/watch?v=VQA2yrpI7Xk",
        )
        .at("RubyConf '12")
        .with_tags(["web", "ruby"]),
        Video::talk(
            "Rails is the new Rails",
            "2011-11-04",
            "https://www.youtube.com/watch?v=7Dh1IWDK2-Q",
        )
        .at("Ruby Midwest '11")
        .with_tags(["ruby", "rails"]),
        Video::talk(
            "The Grapes of Rapid",
            "2010-11-17",
            "https://www.youtube.com/watch?v=C7beg3OzxC4",
        )
        .at("RubyConf '10")
        .with_tag("ruby"),
    ]
}
