//! Built-in sample content used when storage holds no collection yet.

use chrono::{DateTime, TimeZone, Utc};

use blogspace_core::domain::{Post, PostId, PostStatus, User, UserId};

pub const DEMO_USER_ID: &str = "demo-user";

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// The author of every sample post.
pub fn demo_user() -> User {
    let joined = date(2024, 1, 1);
    User {
        id: UserId::from(DEMO_USER_ID),
        email: "demo@example.com".to_string(),
        name: "Demo Author".to_string(),
        avatar: Some(User::default_avatar("demo")),
        bio: Some("A passionate writer and developer".to_string()),
        created_at: joined,
        updated_at: joined,
    }
}

pub fn sample_users() -> Vec<User> {
    vec![demo_user()]
}

struct Sample {
    id: &'static str,
    title: &'static str,
    slug: &'static str,
    excerpt: &'static str,
    content: &'static str,
    tags: &'static [&'static str],
    read_time: u32,
    day: u32,
}

const SAMPLES: &[Sample] = &[
    Sample {
        id: "1",
        title: "Getting Started with Next.js 15",
        slug: "getting-started-nextjs-15",
        excerpt: "Learn the basics of Next.js 15 and how to build modern React applications with the latest features.",
        content: r#"<h2>Introduction to Next.js 15</h2>
<p>Next.js 15 brings exciting new features and improvements that make building React applications even more powerful and efficient. In this comprehensive guide, we'll explore the key features and how to get started.</p>
<h3>Key Features</h3>
<ul>
  <li>Improved App Router with better performance</li>
  <li>Enhanced Server Components</li>
  <li>Better TypeScript support</li>
  <li>Optimized bundling with Turbopack</li>
</ul>
<h3>Getting Started</h3>
<p>To create a new Next.js 15 project, run the following command:</p>
<pre><code>npx create-next-app@latest my-app</code></pre>
<p>This will set up a new project with all the latest features and best practices built in.</p>"#,
        tags: &["nextjs", "react", "web-development"],
        read_time: 5,
        day: 15,
    },
    Sample {
        id: "2",
        title: "The Art of Modern Web Design",
        slug: "art-of-modern-web-design",
        excerpt: "Explore the principles and trends that define modern web design and user experience.",
        content: r#"<h2>Creating Beautiful User Experiences</h2>
<p>Modern web design is about more than just making things look pretty. It's about creating intuitive, accessible, and engaging experiences that delight users and achieve business goals.</p>
<h3>Design Principles</h3>
<ul>
  <li><strong>Simplicity:</strong> Clean, uncluttered layouts that focus on content</li>
  <li><strong>Consistency:</strong> Uniform design patterns throughout the site</li>
  <li><strong>Accessibility:</strong> Ensuring everyone can use your website</li>
  <li><strong>Performance:</strong> Fast loading times and smooth interactions</li>
</ul>
<h3>Current Trends</h3>
<ul>
  <li>Minimalist layouts with plenty of white space</li>
  <li>Bold typography and custom fonts</li>
  <li>Micro-interactions and subtle animations</li>
  <li>Dark mode support</li>
</ul>"#,
        tags: &["design", "ux", "web-development"],
        read_time: 7,
        day: 10,
    },
    Sample {
        id: "3",
        title: "Building Scalable React Applications",
        slug: "building-scalable-react-applications",
        excerpt: "Learn how to architect React applications that can grow and scale with your needs.",
        content: r#"<h2>Architecture for Growth</h2>
<p>As your React application grows, maintaining clean, scalable code becomes increasingly important. This guide covers best practices for building applications that can scale with your team and user base.</p>
<h3>Component Architecture</h3>
<ul>
  <li>Keep components small and focused</li>
  <li>Use composition over inheritance</li>
  <li>Implement proper prop drilling solutions</li>
  <li>Create reusable UI components</li>
</ul>
<h3>State Management</h3>
<ul>
  <li>Local state for component-specific data</li>
  <li>Context API for app-wide state</li>
  <li>External libraries for complex state logic</li>
</ul>"#,
        tags: &["react", "architecture", "scalability"],
        read_time: 8,
        day: 5,
    },
];

/// Three published sample posts by the demo author, dated January 2024.
pub fn sample_posts() -> Vec<Post> {
    SAMPLES
        .iter()
        .map(|s| {
            let at = date(2024, 1, s.day);
            Post {
                id: PostId::from(s.id),
                title: s.title.to_string(),
                content: s.content.to_string(),
                excerpt: s.excerpt.to_string(),
                slug: s.slug.to_string(),
                author_id: UserId::from(DEMO_USER_ID),
                status: PostStatus::Published,
                tags: s.tags.iter().map(|t| t.to_string()).collect(),
                featured_image: Some(format!("https://picsum.photos/800/400?random={}", s.id)),
                read_time: s.read_time,
                created_at: at,
                updated_at: at,
                published_at: Some(at),
            }
        })
        .collect()
}
