//! Static portfolio content rendered by the sections.

pub const OWNER_NAME: &str = "Salma El Rhaiti";
pub const CONTACT_EMAIL: &str = "salmaelrhaiti7@gmail.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Technology {
    pub name: &'static str,
    pub category: &'static str,
    /// devicon class, see https://devicon.dev
    pub icon: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub image: &'static str,
    pub link: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub logo: &'static str,
    pub photo: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const TECHNOLOGIES: &[Technology] = &[
    Technology { name: "TypeScript", category: "Language", icon: "devicon-typescript-plain", color: "#3178C6" },
    Technology { name: "PHP", category: "Language", icon: "devicon-php-plain", color: "#777BB4" },
    Technology { name: "C", category: "Language", icon: "devicon-c-plain", color: "#A8B9CC" },
    Technology { name: "React", category: "Frontend", icon: "devicon-react-original", color: "#61DAFB" },
    Technology { name: "HTML5", category: "Frontend", icon: "devicon-html5-plain", color: "#E34F26" },
    Technology { name: "CSS3", category: "Frontend", icon: "devicon-css3-plain", color: "#1572B6" },
    Technology { name: "Tailwind", category: "Frontend", icon: "devicon-tailwindcss-original", color: "#06B6D4" },
    Technology { name: "Laravel", category: "Backend", icon: "devicon-laravel-original", color: "#FF2D20" },
    Technology { name: "MySQL", category: "Database", icon: "devicon-mysql-original", color: "#4479A1" },
    Technology { name: "Android SDK (Java)", category: "Mobile", icon: "devicon-android-plain", color: "#3DDC84" },
    Technology { name: "Git", category: "Tool", icon: "devicon-git-plain", color: "#F05032" },
    Technology { name: "GitHub", category: "Tool", icon: "devicon-github-original", color: "#F0F0F0" },
    Technology { name: "Linux CLI", category: "Tool", icon: "devicon-linux-plain", color: "#FCC624" },
    Technology { name: "WordPress", category: "CMS", icon: "devicon-wordpress-plain", color: "#21759B" },
    Technology { name: "UML", category: "Methodology", icon: "devicon-thealgorithms-plain", color: "#D4AF37" },
    Technology { name: "Merise", category: "Methodology", icon: "devicon-thealgorithms-plain", color: "#D4AF37" },
    Technology { name: "Photoshop", category: "Design", icon: "devicon-photoshop-plain", color: "#31A8FF" },
    Technology { name: "3ds Max", category: "Design", icon: "devicon-maya-plain", color: "#0696D7" },
];

/// The carousel track: every technology twice, so the CSS loop can jump from
/// the end of the first copy back to the start without a visible seam.
pub fn carousel_track() -> impl Iterator<Item = (usize, &'static Technology)> {
    TECHNOLOGIES.iter().chain(TECHNOLOGIES.iter()).enumerate()
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Hotel Management System with QR Code Integration",
        category: "Web Application",
        description: "Room booking, check-in and billing for a small hotel. Guests scan a QR code to open their reservation and request services from their phone.",
        technologies: &["PHP", "MySQL", "JavaScript", "HTML5", "CSS3"],
        image: "/project1.jpg",
        link: None,
    },
    Project {
        title: "EduVerse – School Management System with API Integration",
        category: "Full-Stack Web Application",
        description: "Users, classes and exams managed through a Laravel REST API consumed by a React and TypeScript front end.",
        technologies: &["React", "TypeScript", "Laravel", "MySQL"],
        image: "/project2.jpg",
        link: None,
    },
    Project {
        title: "Interactive 3D Tour of EST Meknès with Camera Navigation",
        category: "3D Visualization & Virtual Tour",
        description: "A modelled walkthrough of the campus with scripted camera paths between buildings.",
        technologies: &["3ds Max"],
        image: "/project3.jpg",
        link: None,
    },
    Project {
        title: "Cultural Immersion Experience in a Berber Village - Atlas Mountains",
        category: "Frontend Web Project / WordPress with Divi Theme",
        description: "Travel article layout built with Divi, tuned for mobile reading and translated for a multilingual audience.",
        technologies: &["WordPress", "Divi"],
        image: "/themedivi.png",
        link: Some("https://morocclytravel.com/cultural-immersion-a-day-in-the-life-of-a-berber-village/"),
    },
    Project {
        title: "Merendina",
        category: "3D Animation & VFX",
        description: "Short product animation with modelling, lighting and compositing.",
        technologies: &["3ds Max", "Photoshop"],
        image: "/project5.jpg",
        link: None,
    },
    Project {
        title: "Morocco's Festivals and Traditions: A Deep Dive into Cultural Celebrations",
        category: "Frontend Web Project / WordPress with Divi Theme",
        description: "Long-form editorial page with image galleries and a custom Divi theme.",
        technologies: &["WordPress", "Divi"],
        image: "/themedivi2.png",
        link: Some("https://inmoroccotrips.com/moroccos-festivals-and-traditions-a-deep-dive-into-cultural-celebrations/"),
    },
];

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        role: "Apprenante – Piscine 1337",
        company: "1337 Coding School",
        location: "Khouribga, Morocco",
        period: "07/2025",
        description: "Intensive training in C, Shell, and Linux. Completed projects in C programming, Shell scripts, and algorithmic problem-solving. Developed autonomy, resilience, and debugging skills.",
        logo: "/school42.png",
        photo: Some("/mein1337.jpg"),
    },
    Experience {
        role: "Full Stack Development Intern",
        company: "Logicat",
        location: "Meknès, Morocco",
        period: "03/2025 - 05/2025",
        description: "Developed and optimized the EduVerse application using React.js and TypeScript. Designed and integrated a RESTful API with Laravel/MySQL for user, class, and exam management.",
        logo: "/logicat.png",
        photo: None,
    },
    Experience {
        role: "Web Development Intern",
        company: "Agence WebDono",
        location: "Meknès, Morocco",
        period: "04/2025",
        description: "Designed and customized WordPress sites (Divi) and blogs for various clients. Optimized UX/UI and translated websites for multilingual audiences.",
        logo: "/webdono.png",
        photo: None,
    },
    Experience {
        role: "IT Service Intern",
        company: "OCP Group",
        location: "Khouribga, Morocco",
        period: "07/2024",
        description: "Developed a recruitment and communication website for OCP using HTML, CSS, PHP, and JavaScript. Integrated a \"Careers\" section and an interactive contact form.",
        logo: "/ocp.png",
        photo: None,
    },
];

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "Information Technology Training",
        school: "École Supérieure de Technologie (EST)",
        location: "Meknès, Morocco",
        period: "2023 – 2025",
        description: "Specialized training in web development, information technologies, and multimedia. Mastery of modern frameworks and agile methodologies.",
        icon: "🎓",
    },
    Education {
        degree: "Baccalaureate in Physical Sciences",
        school: "Lycée Imam Malek",
        location: "Khouribga, Morocco",
        period: "2022 - 2023",
        description: "Secondary school diploma with a specialization in physical sciences and mathematics.",
        icon: "📚",
    },
];
