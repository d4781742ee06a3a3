// SPDX-License-Identifier: MPL-2.0
//! Hand-authored page content.
//!
//! Pure configuration: sections iterate these arrays and render. Changing
//! the portfolio means editing this file, nothing else.

use super::{
    BlogBlock, BlogPost, Certification, EntryStatus, PostDate, Profile, Project, ProjectTag,
    SkillCategory, SocialLink, Stat, TagTone, Technology, Testimonial, TimelineEntry, TimelineKind,
};

pub const PROFILE: Profile = Profile {
    name: "Zihad Shariar",
    headline: "I build modern, animated web experiences",
    tagline: "Computer Science student and full-stack developer crafting efficient, scalable, user-friendly software.",
    bio: &[
        "I'm a passionate Computer Science student and skilled software developer with expertise in JavaScript, React, Node.js, Three.js, and ASP.NET. Currently pursuing my BSC in Computer Science and Engineering at United International University.",
        "I combine academic knowledge with practical experience to create efficient, scalable, and user-friendly solutions that solve real-world problems. I'm a quick learner who collaborates closely with clients to bring their ideas to life.",
        "Beyond coding, I'm actively involved in leadership development programs and community service initiatives, always striving to make a positive impact through technology and collaboration.",
    ],
    stats: &[
        Stat {
            value: "2+",
            label: "Years Experience",
        },
        Stat {
            value: "15+",
            label: "Projects Completed",
        },
        Stat {
            value: "5+",
            label: "Technologies",
        },
    ],
};

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        kind: TimelineKind::Education,
        title: "BSC in Computer Science and Engineering",
        institution: "United International University",
        duration: "2023 - Present",
        description: "Currently pursuing Bachelor's degree with focus on software engineering, algorithms, and modern web technologies.",
        highlights: &[],
        glyph: "🎓",
        status: EntryStatus::InProgress,
    },
    TimelineEntry {
        kind: TimelineKind::Training,
        title: "Building Bridges Through Leadership Training",
        institution: "Bangladesh Youth Leadership Center",
        duration: "Batch-49, 2024",
        description: "Completed leadership and capacity-building training under BYLC's signature Building Bridges Through Leadership Training (BBLT) program.",
        highlights: &[
            "Attended workshops and interactive sessions to build skills in communication, teamwork, and problem-solving.",
            "Contributed to the branding and outreach efforts of the LIA project through creative marketing materials.",
        ],
        glyph: "🌟",
        status: EntryStatus::Completed,
    },
    TimelineEntry {
        kind: TimelineKind::Education,
        title: "Diploma in Computer Technology",
        institution: "Shyamoli Ideal Polytechnic Institute",
        duration: "2018 - 2023",
        description: "Completed comprehensive diploma program covering programming fundamentals, database management, and software development principles.",
        highlights: &[],
        glyph: "💻",
        status: EntryStatus::Completed,
    },
    TimelineEntry {
        kind: TimelineKind::Training,
        title: "Aspire Leadership Program",
        institution: "Aspire Leader Institute (Founded by Harvard University)",
        duration: "Cohort-3, 2024",
        description: "Completed the Aspire Leaders Program, a global leadership development initiative founded at Harvard University.",
        highlights: &[
            "Engaged in interactive learning modules focused on leadership, critical thinking, and social impact.",
            "Participated in global peer discussions, fostering cross-cultural collaboration and diverse perspectives.",
        ],
        glyph: "🏆",
        status: EntryStatus::Completed,
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Animated 3D Portfolio",
        description: "Personal portfolio with scroll-driven reveal animations, a tabbed project showcase, and decorative 3D canvases for the hero rig, globe, and starfield.",
        tags: &[
            ProjectTag { name: "react", tone: TagTone::Blue },
            ProjectTag { name: "threejs", tone: TagTone::Green },
            ProjectTag { name: "gsap", tone: TagTone::Pink },
        ],
        source_url: "https://github.com/zihad701/3d-portfolio",
    },
    Project {
        name: "Shikhon Utshob",
        description: "Community learning platform making education accessible: course catalog, mentor profiles, and event registration for local learning festivals.",
        tags: &[
            ProjectTag { name: "mern", tone: TagTone::Green },
            ProjectTag { name: "mongodb", tone: TagTone::Blue },
            ProjectTag { name: "tailwind", tone: TagTone::Pink },
        ],
        source_url: "https://github.com/zihad701/shikhon-utshob",
    },
    Project {
        name: "Campus Marketplace",
        description: "Buy-and-sell platform for university students with listing management, search filters, and an ASP.NET backend over SQL Server.",
        tags: &[
            ProjectTag { name: "aspnet", tone: TagTone::Blue },
            ProjectTag { name: "csharp", tone: TagTone::Orange },
            ProjectTag { name: "mysql", tone: TagTone::Green },
        ],
        source_url: "https://github.com/zihad701/campus-marketplace",
    },
    Project {
        name: "Taskflow",
        description: "Kanban-style task manager with drag-ordered boards, deadline reminders, and offline-first local storage.",
        tags: &[
            ProjectTag { name: "javascript", tone: TagTone::Orange },
            ProjectTag { name: "nodejs", tone: TagTone::Green },
            ProjectTag { name: "express", tone: TagTone::Pink },
        ],
        source_url: "https://github.com/zihad701/taskflow",
    },
];

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend Technologies",
        skills: &[
            "HTML",
            "CSS",
            "Tailwind CSS",
            "JavaScript",
            "React.js",
            "Three.js",
            "GSAP",
            "Framer Motion",
        ],
    },
    SkillCategory {
        title: "Backend Technologies",
        skills: &["Node.js", "Express.js", "ASP.NET Framework", "MongoDB", "MySQL"],
    },
    SkillCategory {
        title: "Programming Languages",
        skills: &["C", "C#", "C++", "Java", "Python", "JavaScript"],
    },
    SkillCategory {
        title: "Tools & Platforms",
        skills: &["Git", "GitHub", "Database Management Studio", "AWS", "Figma"],
    },
    SkillCategory {
        title: "Currently Exploring",
        skills: &["Data Structures & Algorithms", "AI/ML", "TypeScript"],
    },
];

pub const TECHNOLOGIES: &[Technology] = &[
    Technology { name: "React", glyph: "⚛" },
    Technology { name: "JavaScript", glyph: "🟨" },
    Technology { name: "Node.js", glyph: "🟩" },
    Technology { name: "Three.js", glyph: "🧊" },
    Technology { name: "MongoDB", glyph: "🍃" },
    Technology { name: "MySQL", glyph: "🐬" },
    Technology { name: "Git", glyph: "🔀" },
    Technology { name: "Figma", glyph: "🎨" },
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "Building Bridges Through Leadership Training",
        organization: "Bangladesh Youth Leadership Center",
        year: "2024",
        description: "Leadership and capacity-building training program",
        glyph: "🎯",
    },
    Certification {
        title: "Aspire Leadership Program",
        organization: "Aspire Leader Institute (Harvard University)",
        year: "2024",
        description: "Global leadership development initiative",
        glyph: "🌟",
    },
    Certification {
        title: "Full Stack Web Development",
        organization: "DevSkill",
        year: "2022",
        description: "Comprehensive web development training",
        glyph: "💻",
    },
    Certification {
        title: "JavaScript Fundamentals",
        organization: "FreeCodeCamp",
        year: "2022",
        description: "Core JavaScript programming concepts",
        glyph: "📜",
    },
    Certification {
        title: "React Development",
        organization: "Udemy",
        year: "2023",
        description: "Modern React development with hooks",
        glyph: "⚛",
    },
    Certification {
        title: "Node.js Backend Development",
        organization: "Coursera",
        year: "2023",
        description: "Server-side development with Node.js",
        glyph: "🟢",
    },
    Certification {
        title: "Database Management",
        organization: "MongoDB University",
        year: "2023",
        description: "NoSQL database design and management",
        glyph: "🍃",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Zihad took our vague idea and turned it into a polished product ahead of schedule. He asks the right questions before writing a single line of code.",
        name: "Sara Ahmed",
        designation: "Founder",
        company: "Brightline Studio",
    },
    Testimonial {
        quote: "The attention to detail in the animations and the performance of the final site exceeded what we thought was possible on our budget.",
        name: "Chris Rahman",
        designation: "Product Lead",
        company: "Northwind Labs",
    },
    Testimonial {
        quote: "A rare combination of technical skill and genuine care for the people using the software. Our volunteers loved the platform from day one.",
        name: "Lisa Chowdhury",
        designation: "Director",
        company: "Shikhon Utshob",
    },
];

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        title: "Building Modern Web Applications with React and Three.js",
        excerpt: "Explore how to create immersive 3D experiences in web applications using React Three Fiber and modern web technologies.",
        date: PostDate {
            year: 2024,
            month: 12,
            day: 15,
        },
        read_minutes: 8,
        category: "Web Development",
        body: &[
            BlogBlock::Heading("Introduction"),
            BlogBlock::Paragraph(
                "Modern web development has evolved tremendously, and today we can create stunning 3D experiences directly in the browser. In this post, I'll walk you through building immersive web applications using React and Three.js.",
            ),
            BlogBlock::Heading("Getting Started with React Three Fiber"),
            BlogBlock::Paragraph(
                "React Three Fiber is a React renderer for Three.js that brings declarative, reusable, and self-contained components to 3D graphics. It makes working with Three.js much more intuitive for React developers.",
            ),
            BlogBlock::Heading("Key Benefits"),
            BlogBlock::Bullets(&[
                "Declarative approach to 3D graphics",
                "Better performance with React's reconciliation",
                "Easier state management",
                "Component reusability",
            ]),
            BlogBlock::Heading("Best Practices"),
            BlogBlock::Paragraph(
                "When building 3D web applications, it's important to consider performance optimization, user experience, and accessibility. Always test your applications across different devices and browsers.",
            ),
            BlogBlock::Heading("Conclusion"),
            BlogBlock::Paragraph(
                "The combination of React and Three.js opens up endless possibilities for creating engaging web experiences. Start experimenting with these technologies and push the boundaries of what's possible on the web.",
            ),
        ],
    },
    BlogPost {
        title: "The Future of Full-Stack Development: Trends to Watch",
        excerpt: "Discover the emerging trends and technologies that are shaping the future of full-stack development in 2024 and beyond.",
        date: PostDate {
            year: 2024,
            month: 12,
            day: 10,
        },
        read_minutes: 6,
        category: "Technology",
        body: &[
            BlogBlock::Heading("The Evolution of Full-Stack Development"),
            BlogBlock::Paragraph(
                "Full-stack development continues to evolve rapidly, with new frameworks, tools, and methodologies emerging regularly. As developers, staying current with these trends is crucial for career growth and project success.",
            ),
            BlogBlock::Heading("Key Trends for 2024"),
            BlogBlock::Bullets(&[
                "AI-powered development tools becoming integral to the workflow",
                "Edge computing moving work closer to users for lower latency",
                "Serverless architecture for scalability and cost-effectiveness",
            ]),
            BlogBlock::Heading("Preparing for the Future"),
            BlogBlock::Paragraph(
                "To stay relevant in this rapidly changing landscape, developers should focus on continuous learning, understanding core principles, and adapting to new technologies as they emerge.",
            ),
        ],
    },
    BlogPost {
        title: "Leadership in Tech: Lessons from My Journey",
        excerpt: "Reflections on leadership development, community building, and the importance of giving back to the tech community.",
        date: PostDate {
            year: 2024,
            month: 12,
            day: 5,
        },
        read_minutes: 5,
        category: "Leadership",
        body: &[
            BlogBlock::Heading("The Intersection of Technology and Leadership"),
            BlogBlock::Paragraph(
                "Throughout my journey in technology, I've learned that technical skills alone aren't enough. Leadership, communication, and community building are equally important for creating meaningful impact.",
            ),
            BlogBlock::Heading("Key Leadership Lessons"),
            BlogBlock::Bullets(&[
                "Listen first, code second: understand the problem and the people affected by it",
                "Empower others: great leaders create more leaders",
                "Embrace failure: fail fast, learn quickly, iterate on feedback",
            ]),
            BlogBlock::Heading("Building Communities"),
            BlogBlock::Paragraph(
                "Through initiatives like Shikhon Utshob, I've learned that building communities around shared learning goals creates lasting positive impact. Technology should serve people, not the other way around.",
            ),
            BlogBlock::Heading("Looking Forward"),
            BlogBlock::Paragraph(
                "As I continue my journey, I'm committed to using technology as a force for positive change, whether through innovative projects or community initiatives that make education more accessible.",
            ),
        ],
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "Facebook",
        url: "https://www.facebook.com/zihadsha701/",
        glyph: "f",
    },
    SocialLink {
        label: "Instagram",
        url: "https://www.instagram.com/zihad_shah/",
        glyph: "◎",
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/zihad701/",
        glyph: "in",
    },
];

pub const CONTACT_EMAIL: &str = "zihad701@outlook.com";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_blog_post_date_is_valid() {
        for post in BLOG_POSTS {
            assert!(
                post.date.to_naive().is_some(),
                "invalid date on '{}'",
                post.title
            );
        }
    }

    #[test]
    fn timeline_mixes_both_kinds() {
        assert!(TIMELINE.iter().any(|e| e.kind == TimelineKind::Education));
        assert!(TIMELINE.iter().any(|e| e.kind == TimelineKind::Training));
    }

    #[test]
    fn projects_carry_tags_and_source_links() {
        for project in PROJECTS {
            assert!(!project.tags.is_empty(), "untagged project {}", project.name);
            assert!(project.source_url.starts_with("https://"));
        }
    }

    #[test]
    fn skill_categories_are_non_empty() {
        for category in SKILL_CATEGORIES {
            assert!(!category.skills.is_empty());
        }
    }

    #[test]
    fn social_links_are_https() {
        for link in SOCIAL_LINKS {
            assert!(link.url.starts_with("https://"), "{}", link.label);
        }
    }
}
