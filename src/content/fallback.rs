//! Bundled portfolio content
//!
//! Every section ships with content compiled into the binary so the viewer
//! renders fully without a network connection. The API can replace a section
//! at runtime but never has to.

use super::{
    About, BlogPost, Contact, Education, Experience, Hero, Highlight, Project, Resume, Section,
    SectionContent, Skill, SkillGroup,
};

/// Returns the bundled content for any section
///
/// Total by construction; there is no section without fallback content.
pub fn for_section(section: Section) -> SectionContent {
    match section {
        Section::Hero => SectionContent::Hero(hero()),
        Section::About => SectionContent::About(about()),
        Section::Skills => SectionContent::Skills(skills()),
        Section::Projects => SectionContent::Projects(projects()),
        Section::Contact => SectionContent::Contact(contact()),
        Section::Blog => SectionContent::Blog(blog_posts()),
        Section::Resume => SectionContent::Resume(resume()),
    }
}

/// Bundled hero banner
pub fn hero() -> Hero {
    Hero {
        name: "Mayank Rawat".to_string(),
        subtitle: "iOS Developer by Profession, Explorer by Passion".to_string(),
        description: "Experienced iOS Developer with a track record of delivering polished, high-performance apps. Skilled in Swift and experienced with iOS frameworks such as UIKit, SwiftUI, and Foundation. I love to travel and explore new places.".to_string(),
    }
}

/// Bundled biography
pub fn about() -> About {
    About {
        name: "Mayank Rawat".to_string(),
        title: "Senior iOS Developer".to_string(),
        description: "I'm a Senior iOS Developer with over 7 years of experience crafting high-performance mobile applications. I specialize in building scalable, user-centric iOS solutions that serve millions of users, with expertise in Swift, UIKit, SwiftUI, and modern iOS architectures.\n\nCurrently at Paytm since January 2020, I've developed key features for Homepage, Search, and Storefront modules. Prior to that, I worked at Samsung Research Institute (2017-2020), building the Universal Guide Module for the Smart Things App.\n\nI'm passionate about writing clean, maintainable code and following iOS best practices. When I'm not coding, you can find me exploring new places and traveling.".to_string(),
        highlights: vec![
            Highlight {
                number: "7+".to_string(),
                label: "Years Experience".to_string(),
            },
            Highlight {
                number: "2".to_string(),
                label: "Major Companies".to_string(),
            },
        ],
    }
}

fn skill(name: &str, level: u8) -> Skill {
    Skill {
        name: name.to_string(),
        level,
    }
}

fn group(category: &str, icon: &str, skills: Vec<Skill>) -> SkillGroup {
    SkillGroup {
        category: category.to_string(),
        icon: icon.to_string(),
        skills,
    }
}

/// Bundled skill groups
pub fn skills() -> Vec<SkillGroup> {
    vec![
        group(
            "iOS Development",
            "📱",
            vec![
                skill("Swift", 95),
                skill("UIKit", 92),
                skill("SwiftUI", 88),
                skill("iOS Frameworks", 90),
                skill("Xcode", 90),
            ],
        ),
        group(
            "Frameworks & Architecture",
            "🏗️",
            vec![
                skill("Combine", 85),
                skill("Foundation", 92),
                skill("Core Data", 80),
                skill("MVC/MVVM/VIPER", 88),
                skill("REST APIs", 90),
            ],
        ),
        group(
            "Development Tools",
            "🛠️",
            vec![
                skill("Git & Version Control", 90),
                skill("Code Optimization", 87),
                skill("App Performance", 85),
                skill("Debugging & Testing", 88),
                skill("CI/CD", 80),
            ],
        ),
        group(
            "Other Skills",
            "💡",
            vec![
                skill("Data Structures & Algorithms", 85),
                skill("Problem Solving", 90),
                skill("App Maintenance", 88),
                skill("Code Review", 85),
                skill("Agile Development", 82),
            ],
        ),
    ]
}

fn project(
    id: i64,
    title: &str,
    category: &str,
    description: &str,
    technologies: &[&str],
    live_url: &str,
) -> Project {
    Project {
        id,
        title: title.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        github_url: String::new(),
        live_url: live_url.to_string(),
    }
}

/// Bundled project list
pub fn projects() -> Vec<Project> {
    const PAYTM_APP: &str =
        "https://apps.apple.com/in/app/paytm-secure-payments-wallet/id473941634";

    vec![
        project(
            1,
            "Paytm Home",
            "iOS Application",
            "Handling Paytm homepage, left menu and global search and deliver various features along with these pages.",
            &["Swift", "UIKit", "REST APIs", "MVVM"],
            PAYTM_APP,
        ),
        project(
            2,
            "Paytm Storefront Module",
            "iOS Application",
            "Maintained and enhanced Storefront module which acts as a client for other pages, handling navigation and content rendering.",
            &["Swift", "UIKit", "Combine", "Modular Architecture"],
            PAYTM_APP,
        ),
        project(
            3,
            "Paytm Common UI",
            "iOS Framework",
            "Used for having smaller UI components which is used across Paytm other verticals.",
            &["Swift", "UIKit", "SwiftUI", "Component Library"],
            PAYTM_APP,
        ),
        project(
            4,
            "Phoenix & Alipay SDK",
            "iOS Framework",
            "Worked on phoenix and alipay SDK which handles all the React pages inside the app, enabling hybrid app functionality.",
            &["Swift", "React Native", "JavaScript Bridge", "SDK Development"],
            PAYTM_APP,
        ),
        project(
            5,
            "Universal Guide Module",
            "iOS Feature",
            "Built Universal Guide Module in Smart Things App that shows content based on user's TV viewing history and enables content switching between mobile and TV.",
            &["Swift", "UIKit", "Content APIs", "Smart TV Integration"],
            "https://apps.apple.com/in/app/smartthings/id1222822904",
        ),
    ]
}

/// Bundled contact details
pub fn contact() -> Contact {
    Contact {
        email: "rawat.mayank1234@gmail.com".to_string(),
        linkedin: Some("linkedin.com/in/mayank-rawat-0585a010b".to_string()),
        github: Some("github.com/legen12345dairy".to_string()),
        instagram: Some("_mayank_rawat".to_string()),
        whatsapp: Some("9643764341".to_string()),
        phone: Some("+91-9643764341".to_string()),
        linkedin_url: Some("https://www.linkedin.com/in/mayank-rawat-0585a010b/".to_string()),
        github_url: Some("https://github.com/legen12345dairy".to_string()),
        instagram_url: Some("https://www.instagram.com/_mayank_rawat".to_string()),
        whatsapp_url: Some("https://wa.me/919643764341".to_string()),
    }
}

/// Bundled blog posts
pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: 1,
            slug: "getting-started-with-react".to_string(),
            title: "Getting Started with React: A Beginner's Guide".to_string(),
            date: "December 15, 2023".to_string(),
            read_time_minutes: 5,
            tags: vec![
                "React".to_string(),
                "JavaScript".to_string(),
                "Web Development".to_string(),
            ],
            excerpt: "Learn the fundamentals of React and start building your first application. This guide covers components, props, state, and more.".to_string(),
            content: r#"# Getting Started with React: A Beginner's Guide

React has become one of the most popular JavaScript libraries for building user interfaces. In this guide, we'll explore the fundamentals and help you get started with your first React application.

## What is React?

React is a JavaScript library developed by Facebook for building user interfaces, particularly single-page applications. It allows developers to create reusable UI components and manage the state of their applications efficiently.

## Key Concepts

### Components

Components are the building blocks of any React application. They are reusable pieces of code that return HTML elements.

```jsx
function Welcome() {
  return <h1>Hello, World!</h1>;
}
```

### Props

Props (short for properties) are how you pass data from parent components to child components.

```jsx
function Greeting({ name }) {
  return <h1>Hello, {name}!</h1>;
}
```

### State

State is a way to manage data that changes over time in your component.

```jsx
const [count, setCount] = useState(0);
```

## Getting Started

1. Install Node.js and npm
2. Create a new React app with `create-react-app`
3. Start building your components
4. Learn hooks like useState and useEffect

## Conclusion

React is a powerful library that makes building interactive UIs easier. Start with the basics, practice regularly, and you'll be building amazing applications in no time!"#
                .to_string(),
        },
        BlogPost {
            id: 2,
            slug: "modern-css-techniques".to_string(),
            title: "Modern CSS Techniques for 2024".to_string(),
            date: "January 2, 2024".to_string(),
            read_time_minutes: 8,
            tags: vec![
                "CSS".to_string(),
                "Web Design".to_string(),
                "Frontend".to_string(),
            ],
            excerpt: "Explore the latest CSS features and techniques that will make your web designs more efficient and beautiful.".to_string(),
            content: r#"# Modern CSS Techniques for 2024

CSS has evolved significantly over the years. Let's explore some modern techniques that will improve your workflow and create better user experiences.

## Container Queries

Container queries allow you to apply styles based on the size of a container rather than the viewport.

```css
@container (min-width: 700px) {
  .card {
    display: grid;
    grid-template-columns: 2fr 1fr;
  }
}
```

## CSS Grid and Flexbox

Master these layout systems for creating responsive designs without media queries.

### Grid Example

```css
.grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
  gap: 1rem;
}
```

## Custom Properties (CSS Variables)

Use CSS custom properties for maintainable theming.

```css
:root {
  --primary-color: #3b82f6;
  --spacing-unit: 8px;
}

.button {
  background-color: var(--primary-color);
  padding: calc(var(--spacing-unit) * 2);
}
```

## Conclusion

These modern CSS techniques will help you write cleaner, more maintainable code. Experiment with them in your next project!"#
                .to_string(),
        },
        BlogPost {
            id: 3,
            slug: "building-scalable-applications".to_string(),
            title: "Building Scalable Web Applications".to_string(),
            date: "January 10, 2024".to_string(),
            read_time_minutes: 10,
            tags: vec![
                "Architecture".to_string(),
                "Best Practices".to_string(),
                "Scalability".to_string(),
            ],
            excerpt: "Best practices and architectural patterns for building web applications that scale.".to_string(),
            content: r#"# Building Scalable Web Applications

Scalability is crucial for modern web applications. Let's explore key principles and patterns for building applications that grow with your user base.

## Architectural Patterns

### Microservices

Break your application into smaller, independent services that can be deployed and scaled independently.

### Event-Driven Architecture

Use events to communicate between different parts of your system asynchronously.

## Database Considerations

### Indexing

Proper database indexing can dramatically improve query performance.

### Caching Strategies

Implement caching at multiple levels:
- Browser caching
- CDN caching
- Application-level caching
- Database query caching

## Code Organization

### Modular Design

Keep your code modular and follow the Single Responsibility Principle.

```javascript
// Good: Each module has a single responsibility
import { userService } from './services/userService';
import { authService } from './services/authService';
```

## Performance Optimization

1. Lazy loading components
2. Code splitting
3. Image optimization
4. Minimize bundle size

## Conclusion

Building scalable applications requires careful planning and following best practices. Start with these principles and adapt them to your specific needs."#
                .to_string(),
        },
    ]
}

/// Bundled resume
pub fn resume() -> Resume {
    Resume {
        experience: vec![
            Experience {
                title: "Senior Software Engineer".to_string(),
                company: "Paytm, Noida".to_string(),
                period: "January 2020 - Present".to_string(),
                description: vec![
                    "Working as iOS Developer in Paytm Home Team".to_string(),
                    "Delivered various features in Paytm Homepage and Search".to_string(),
                    "Maintains Storefront module which acts as a client for other pages".to_string(),
                    "Worked in Paytm Cashback module in the past".to_string(),
                    "Worked in phoenix, alipay sdk which handles all the react pages inside app".to_string(),
                    "Handled Paytm Home UI revamps including Bottom Bar and Dark Mode support".to_string(),
                ],
            },
            Experience {
                title: "Software Engineer".to_string(),
                company: "Samsung Research Institute, Noida".to_string(),
                period: "July 2017 - January 2020".to_string(),
                description: vec![
                    "Worked in Smart Things App which involves app maintenance and Bug fixing, Code Optimization".to_string(),
                    "Built Universal Guide Module in App: this feature shows us the content according to the type of content particular user has previously watched in TV".to_string(),
                    "We can also switch to that Particular content in TV, directly from our mobile phone".to_string(),
                ],
            },
            Experience {
                title: "Internship".to_string(),
                company: "Coding Blocks, Delhi".to_string(),
                period: "July 2016 - September 2016".to_string(),
                description: vec!["Web Development with HTML 5, CSS and Javascript".to_string()],
            },
        ],
        education: vec![
            Education {
                degree: "Bachelor of Engineering in Computer Science".to_string(),
                school: "NIT Kurukshetra, Haryana".to_string(),
                period: "July 2013 - July 2017".to_string(),
                description: String::new(),
            },
            Education {
                degree: "Intermediate".to_string(),
                school: "SVM Kotdwara".to_string(),
                period: "July 2012".to_string(),
                description: String::new(),
            },
        ],
        certifications: vec![
            "iOS Development".to_string(),
            "Swift Programming".to_string(),
            "Data Structures and Algorithms".to_string(),
            "App Development Best Practices".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_section_has_fallback_content() {
        for section in Section::all() {
            let content = for_section(*section);
            assert_eq!(content.section(), *section);
        }
    }

    #[test]
    fn test_fallback_collections_are_never_empty() {
        for section in Section::all() {
            match for_section(*section) {
                SectionContent::Skills(groups) => assert!(!groups.is_empty()),
                SectionContent::Projects(projects) => assert!(!projects.is_empty()),
                SectionContent::Blog(posts) => assert!(!posts.is_empty()),
                SectionContent::Hero(hero) => assert!(!hero.name.is_empty()),
                SectionContent::About(about) => assert!(!about.description.is_empty()),
                SectionContent::Contact(contact) => assert!(!contact.email.is_empty()),
                SectionContent::Resume(resume) => assert!(!resume.experience.is_empty()),
            }
        }
    }

    #[test]
    fn test_skills_have_four_groups_of_five() {
        let groups = skills();
        assert_eq!(groups.len(), 4);
        for group in &groups {
            assert_eq!(group.skills.len(), 5, "group {} is incomplete", group.category);
            assert!(!group.icon.is_empty());
        }
        assert_eq!(groups[0].category, "iOS Development");
        assert_eq!(groups[3].category, "Other Skills");
    }

    #[test]
    fn test_projects_have_unique_ids_and_technologies() {
        let projects = projects();
        assert_eq!(projects.len(), 5);

        let mut ids: Vec<i64> = projects.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5, "project ids are not unique");

        for project in &projects {
            assert!(!project.technologies.is_empty());
            assert!(!project.live_url.is_empty());
        }
    }

    #[test]
    fn test_blog_posts_have_unique_slugs() {
        let posts = blog_posts();
        assert_eq!(posts.len(), 3);

        let mut slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), 3, "blog slugs are not unique");

        for post in &posts {
            assert!(!post.content.is_empty());
            assert!(post.read_time_minutes > 0);
        }
    }

    #[test]
    fn test_resume_covers_three_jobs() {
        let resume = resume();
        assert_eq!(resume.experience.len(), 3);
        assert_eq!(resume.education.len(), 2);
        assert_eq!(resume.certifications.len(), 4);
        assert_eq!(resume.experience[0].company, "Paytm, Noida");
    }

    #[test]
    fn test_hero_and_about_agree_on_the_name() {
        assert_eq!(hero().name, about().name);
    }
}
