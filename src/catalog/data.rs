//! Built-in university list, used when no data/universities.json override
//! is present, plus the slug -> domain table for logo backfill.

use super::University;

fn uni(
    slug: &str,
    name: &str,
    city: &str,
    image: &str,
    description: &str,
    requirements: &[&str],
    programs: &[&str],
) -> University {
    University {
        slug: slug.to_string(),
        name: name.to_string(),
        city: city.to_string(),
        image: image.to_string(),
        photo_url: None,
        description: description.to_string(),
        requirements: requirements.iter().map(|s| s.to_string()).collect(),
        programs: programs.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn builtin() -> Vec<University> {
    vec![
        uni(
            "university-of-dubai",
            "University of Dubai",
            "Dubai",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/8/87/University_of_Dubai_logo.svg/512px-University_of_Dubai_logo.svg.png",
            "A leading university in Dubai offering undergraduate and postgraduate programs across business, engineering, and IT.",
            &[
                "High school diploma (or equivalent)",
                "Official transcripts",
                "English proficiency (IELTS 6.0 / TOEFL iBT 70)",
                "Valid ID/Passport",
            ],
            &["Business", "Engineering", "IT"],
        ),
        uni(
            "heriot-watt-university-dubai",
            "Heriot-Watt University Dubai",
            "Dubai",
            "",
            "Scottish university branch campus offering engineering, business, and design.",
            &["High school certificate", "English proficiency"],
            &["Engineering", "Business", "Design"],
        ),
        uni(
            "middlesex-university-dubai",
            "Middlesex University Dubai",
            "Dubai",
            "",
            "UK university branch campus with broad UG/PG offerings.",
            &["High school certificate", "English proficiency"],
            &["Business", "Law", "IT", "Media"],
        ),
        uni(
            "canadian-university-dubai",
            "Canadian University Dubai",
            "Dubai",
            "",
            "Private university offering Canadian-curriculum inspired programs.",
            &["High school certificate", "English proficiency"],
            &["Business", "Engineering", "Architecture", "Communication"],
        ),
        uni(
            "rit-dubai",
            "Rochester Institute of Technology (RIT) Dubai",
            "Dubai",
            "",
            "US university branch campus focused on engineering and computing.",
            &["High school certificate", "English proficiency"],
            &["Engineering", "Computing", "Business"],
        ),
        uni(
            "uowd",
            "University of Wollongong in Dubai (UOWD)",
            "Dubai",
            "",
            "One of Dubai's oldest private universities with broad programs.",
            &["High school certificate", "English proficiency"],
            &["Business", "IT", "Engineering", "Media"],
        ),
        uni(
            "american-university-in-dubai",
            "American University in Dubai",
            "Dubai",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/f/ff/AUD_Logo.svg/512px-AUD_Logo.svg.png",
            "An American-style institution offering diverse programs with strong industry links.",
            &[
                "High school certificate",
                "SAT/EmSAT (program dependent)",
                "English proficiency (IELTS/TOEFL)",
            ],
            &["Business", "Engineering", "Communication", "Architecture"],
        ),
        uni(
            "zayed-university",
            "Zayed University",
            "Dubai",
            "https://upload.wikimedia.org/wikipedia/en/thumb/8/8a/Zayed_University_Logo.png/512px-Zayed_University_Logo.png",
            "Federal university with campuses in Dubai and Abu Dhabi offering a range of programs.",
            &[
                "High school certificate",
                "English proficiency",
                "Program-specific assessments",
            ],
            &["Education", "Business", "IT", "Arts"],
        ),
        uni(
            "khalifa-university",
            "Khalifa University",
            "Abu Dhabi",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/3/3a/Khalifa_University_logo.svg/512px-Khalifa_University_logo.svg.png",
            "Top-ranked science and engineering university in Abu Dhabi.",
            &[
                "Strong STEM high school background",
                "Math/Science assessments",
                "English proficiency",
            ],
            &["Engineering", "Science", "Medicine"],
        ),
        uni(
            "nyu-abu-dhabi",
            "New York University Abu Dhabi",
            "Abu Dhabi",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/0/00/New_York_University_Logo.svg/512px-New_York_University_Logo.svg.png",
            "Selective liberal arts and research university with global curriculum.",
            &[
                "Competitive academic record",
                "Standardized tests (optional/varies)",
                "Essays and recommendations",
            ],
            &["Liberal Arts", "Science", "Engineering"],
        ),
        uni(
            "american-university-of-sharjah",
            "American University of Sharjah",
            "Sharjah",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/8/8b/AUS_logo.svg/512px-AUS_logo.svg.png",
            "Accredited American-style university known for architecture, engineering, and business.",
            &[
                "High school certificate",
                "Math/Physics placement (program dependent)",
                "English proficiency",
            ],
            &["Architecture", "Engineering", "Business", "Arts"],
        ),
        uni(
            "university-of-sharjah",
            "University of Sharjah",
            "Sharjah",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a2/University_of_Sharjah_logo.svg/512px-University_of_Sharjah_logo.svg.png",
            "Comprehensive university offering programs across medicine, engineering, and humanities.",
            &[
                "High school certificate",
                "Program-specific criteria",
                "English/Arabic proficiency per program",
            ],
            &["Medicine", "Engineering", "Business", "Humanities"],
        ),
        uni(
            "ajman-university",
            "Ajman University",
            "Ajman",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/8/8b/Ajman_University_logo.svg/512px-Ajman_University_logo.svg.png",
            "Private university with programs in engineering, business, pharmacy, and more.",
            &["High school certificate", "English proficiency"],
            &["Engineering", "Business", "Pharmacy", "Law"],
        ),
        uni(
            "gulf-medical-university",
            "Gulf Medical University",
            "Ajman",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/8/86/Gulf_Medical_University_logo.png/512px-Gulf_Medical_University_logo.png",
            "Medical-focused university offering health sciences programs.",
            &[
                "High school science stream",
                "Entrance exam/interview",
                "English proficiency",
            ],
            &["Medicine", "Health Sciences"],
        ),
        uni(
            "aurak",
            "American University of Ras Al Khaimah",
            "Ras Al Khaimah",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/2/2c/AURAK_logo.svg/512px-AURAK_logo.svg.png",
            "Public university with American-style curriculum.",
            &["High school certificate", "English proficiency"],
            &["Engineering", "Business", "Design"],
        ),
        uni(
            "university-of-fujairah",
            "University of Fujairah",
            "Fujairah",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/5/5a/University_of_Fujairah_logo.png/512px-University_of_Fujairah_logo.png",
            "University serving the East Coast with various programs.",
            &["High school certificate", "English proficiency"],
            &["Business", "IT"],
        ),
        uni(
            "emirates-canadian-university-college",
            "Emirates Canadian University College",
            "Umm Al Quwain",
            "https://upload.wikimedia.org/wikipedia/en/thumb/d/d2/Emirates_Canadian_University_College_logo.png/512px-Emirates_Canadian_University_College_logo.png",
            "Private college offering business and law programs.",
            &["High school certificate", "English proficiency"],
            &["Business", "Law"],
        ),
    ]
}

/// Logo lookup for entries without a configured image.
pub fn logo_domain(slug: &str) -> Option<&'static str> {
    let domain = match slug {
        // Abu Dhabi / Al Ain
        "united-arab-emirates-university" => "uaeu.ac.ae",
        "abu-dhabi-university" => "adu.ac.ae",
        "sorbonne-university-abu-dhabi" => "sorbonne.ae",
        "khalifa-university" => "ku.ac.ae",
        "nyu-abu-dhabi" => "nyuad.nyu.edu",
        // Dubai
        "university-of-dubai" => "ud.ac.ae",
        "american-university-in-dubai" => "aud.edu",
        "zayed-university" => "zu.ac.ae",
        "heriot-watt-university-dubai" => "hw.ac.uk",
        "middlesex-university-dubai" => "mdx.ac.ae",
        "university-of-birmingham-dubai" => "birmingham.ac.uk",
        "canadian-university-dubai" => "cud.ac.ae",
        "bits-pilani-dubai" => "bits-pilani.ac.in",
        "mahe-dubai" => "manipal.edu",
        "amity-university-dubai" => "amityuniversity.ae",
        "curtin-university-dubai" => "curtindubai.ac.ae",
        "murdoch-university-dubai" => "murdochuniversitydubai.com",
        "sp-jain-dubai" => "spjain.ae",
        "rit-dubai" => "rit.edu",
        "hult-dubai" => "hult.edu",
        "uowd" => "uowdubai.ac.ae",
        // Sharjah
        "american-university-of-sharjah" => "aus.edu",
        "university-of-sharjah" => "sharjah.ac.ae",
        // Ajman
        "ajman-university" => "ajman.ac.ae",
        "gulf-medical-university" => "gmu.ac.ae",
        // Ras Al Khaimah
        "aurak" => "aurak.ac.ae",
        "rakmhsu" => "rakmhsu.ac.ae",
        // Fujairah
        "university-of-fujairah" => "uof.ac.ae",
        // Umm Al Quwain
        "emirates-canadian-university-college" => "ecuc.ac.ae",
        _ => return None,
    };
    Some(domain)
}
