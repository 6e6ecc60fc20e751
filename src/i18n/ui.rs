//! The English interface dictionary, grouped by feature.

/// Site-wide metadata strings.
pub struct SiteStrings {
    pub title: &'static str,
    pub description: &'static str,
}

/// Top navigation labels.
pub struct NavStrings {
    pub home: &'static str,
    pub blog: &'static str,
    pub about: &'static str,
    pub projects: &'static str,
    pub toggle_theme: &'static str,
}

/// Footer labels.
pub struct FooterStrings {
    pub rights: &'static str,
}

/// Home page copy.
pub struct HomeStrings {
    pub page_title: &'static str,
    pub page_description: &'static str,
    pub hero_greeting: &'static str,
    pub hero_subtitle_part1: &'static str,
    pub hero_subtitle_part2: &'static str,
    pub hero_introduction: &'static str,
    pub hero_view_work_button: &'static str,
    pub hero_contact_button: &'static str,
    pub hero_image_alt: &'static str,
    pub featured_projects_title: &'static str,
    pub featured_projects_description: &'static str,
    pub project_card_view_project: &'static str,
    pub project_card_view_code: &'static str,
    pub image_not_available: &'static str,
    pub my_skills_title: &'static str,
    pub my_skills_description: &'static str,
    pub experience_title: &'static str,
    pub experience_present: &'static str,
}

/// About page copy.
pub struct AboutStrings {
    pub page_title: &'static str,
    pub page_description: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub what_we_do_title: &'static str,
    pub what_we_do_body: &'static str,
}

/// Projects list page copy.
pub struct ProjectsPageStrings {
    pub title: &'static str,
    pub meta_title: &'static str,
    pub meta_description: &'static str,
    pub no_projects: &'static str,
    pub no_projects_description: &'static str,
}

/// Project detail page copy.
pub struct ProjectDetailStrings {
    pub back_to_projects: &'static str,
    pub category_label: &'static str,
    pub date_label: &'static str,
    pub about_title: &'static str,
    pub key_features_title: &'static str,
    pub challenges_title: &'static str,
    pub learnings_title: &'static str,
    pub visit_project_button: &'static str,
    pub view_code_button: &'static str,
}

/// Blog list page copy.
pub struct BlogPageStrings {
    pub page_title: &'static str,
    pub page_description: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub coming_soon: &'static str,
    pub published_on: &'static str,
    pub read_more: &'static str,
    pub reading_time_suffix: &'static str,
    pub search_placeholder: &'static str,
    pub all_tags_label: &'static str,
    pub no_posts_found: &'static str,
}

/// Blog post page copy.
pub struct BlogPostStrings {
    pub published_on: &'static str,
    pub updated_on: &'static str,
    pub back_to_list: &'static str,
    pub reading_time_suffix: &'static str,
    pub related_posts_title: &'static str,
    pub read_more: &'static str,
}

/// Not-found page copy.
pub struct NotFoundStrings {
    pub page_title: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub home_link: &'static str,
}

/// All interface strings for one locale.
pub struct UiStrings {
    pub site: SiteStrings,
    pub nav: NavStrings,
    pub footer: FooterStrings,
    pub home: HomeStrings,
    pub about: AboutStrings,
    pub projects_page: ProjectsPageStrings,
    pub project_detail: ProjectDetailStrings,
    pub blog_page: BlogPageStrings,
    pub blog_post: BlogPostStrings,
    pub not_found: NotFoundStrings,
}

pub static EN: UiStrings = UiStrings {
    site: SiteStrings {
        title: "Shaheen | DevOps & Cloud Engineer",
        description: "Portfolio of Shaheen, a DevOps and Cloud Engineer building reliable, scalable cloud-native systems.",
    },
    nav: NavStrings {
        home: "Home",
        blog: "Blog",
        about: "About",
        projects: "Projects",
        toggle_theme: "Toggle dark mode",
    },
    footer: FooterStrings {
        rights: "All rights reserved.",
    },
    home: HomeStrings {
        page_title: "Home | Shaheen - FullStack Developer",
        page_description: "Welcome to the portfolio of Shaheen, a FullStack developer passionate about creating innovative web experiences.",
        hero_greeting: "Hello, I'm Shaheen Nayyar",
        hero_subtitle_part1: "DevOps Engineer",
        hero_subtitle_part2: "DevOps Enthusiast",
        hero_introduction: "Turning infrastructure complexity into streamlined, automated solutions.",
        hero_view_work_button: "Let's Connect",
        hero_contact_button: "View Resume",
        hero_image_alt: "Profile image of Shaheen",
        featured_projects_title: "Projects",
        featured_projects_description: "Here are some of the projects I've worked on. Feel free to explore!",
        project_card_view_project: "View Project",
        project_card_view_code: "View Code",
        image_not_available: "Image not available for now",
        my_skills_title: "My Skills",
        my_skills_description: "Explore the expertise and abilities that define my work and passion.",
        experience_title: "Experience",
        experience_present: "Present",
    },
    about: AboutStrings {
        page_title: "About Me",
        page_description: "Learn more about my background in DevOps and Cloud, and the projects I have delivered.",
        title: "About Me",
        description: "I'm Shaheen Nayyar — a teacher turned DevOps learner passionate about building scalable, automated, and reliable systems. My teaching background helped me develop patience, clarity, and a love for simplifying complex ideas. I'm currently exploring tools like Docker, Kubernetes, Terraform, and Jenkins while documenting my learning journey.",
        what_we_do_title: "What I Do",
        what_we_do_body: "DevOps engineering focused on CI/CD (Jenkins), containerization (Docker), Kubernetes orchestration, cloud architecture, automation. I simplify complex workflows and document my learning through real-world projects.",
    },
    projects_page: ProjectsPageStrings {
        title: "My Projects",
        meta_title: "My Projects | Shaheen's Portfolio",
        meta_description: "Discover all of Shaheen's projects.",
        no_projects: "No projects to display at the moment.",
        no_projects_description: "It seems that you don't have any projects to display at the moment.",
    },
    project_detail: ProjectDetailStrings {
        back_to_projects: "Back to Projects",
        category_label: "Category:",
        date_label: "Date:",
        about_title: "About this project",
        key_features_title: "Key Features",
        challenges_title: "Challenges",
        learnings_title: "Learnings",
        visit_project_button: "Visit Project",
        view_code_button: "View Code",
    },
    blog_page: BlogPageStrings {
        page_title: "My Technical Blog",
        page_description: "Articles and thoughts on web development, software architecture, and new technologies.",
        title: "My Technical Blog",
        description: "Articles and thoughts on web development, software architecture, and new technologies.",
        coming_soon: "Blog posts will appear here soon. Check back later!",
        published_on: "Published on: ",
        read_more: "Read more",
        reading_time_suffix: "min read",
        search_placeholder: "Search articles...",
        all_tags_label: "All tags",
        no_posts_found: "No posts found.",
    },
    blog_post: BlogPostStrings {
        published_on: "Published on: ",
        updated_on: "Updated on: ",
        back_to_list: "Back to blog list",
        reading_time_suffix: "min read",
        related_posts_title: "Continue Reading",
        read_more: "Read more",
    },
    not_found: NotFoundStrings {
        page_title: "Page Not Found",
        title: "Oops! Page Not Found",
        message: "Sorry, the page you are looking for does not seem to exist. Check the URL or return to the homepage.",
        home_link: "Return to Homepage",
    },
};
