//! Blog posts.

use crate::utils::date::Date;

/// A blog post. `content` is trusted HTML inserted verbatim into the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Post {
    pub id: &'static str,
    pub title: &'static str,
    /// Publication date, `YYYY-MM-DD`.
    pub date: &'static str,
    pub author: &'static str,
    pub excerpt: &'static str,
    pub content: &'static str,
}

impl Post {
    /// Site-relative path, e.g. `/blog/seo-best-practices`.
    pub fn path(&self) -> String {
        format!("/blog/{}", self.id)
    }

    pub fn parsed_date(&self) -> Option<Date> {
        Date::parse(self.date)
    }

    /// Reader-facing date (`1/1/2026`); the raw string if it does not parse.
    pub fn display_date(&self) -> String {
        self.parsed_date()
            .map_or_else(|| self.date.to_owned(), Date::to_us_short)
    }
}

pub static POSTS: &[Post] = &[
    Post {
        id: "getting-started-with-nextjs",
        title: "Getting Started with Next.js",
        date: "2026-01-01",
        author: "Monkey D. Luffy",
        excerpt: "Learn the fundamentals of Next.js and how to build modern web applications.",
        content: r#"
      <h2>Introduction to Next.js</h2>
      <p>Next.js is a React framework that provides a great developer experience with many built-in features.</p>

      <h3>Key Features</h3>
      <ul>
        <li>Server-side rendering (SSR)</li>
        <li>Static site generation (SSG)</li>
        <li>API routes</li>
        <li>Dynamic routing</li>
        <li>Automatic code splitting</li>
      </ul>

      <h3>Getting Started</h3>
      <p>To create a new Next.js project, you can use the following command:</p>
      <pre><code>npx create-next-app@latest my-app</code></pre>

      <p>This will create a new Next.js application with all the necessary dependencies and configuration files.</p>
    "#,
    },
    Post {
        id: "understanding-metadata",
        title: "Understanding Metadata in Web Dev",
        date: "2026-01-01",
        author: "Roronoa Zoro",
        excerpt: "A comprehensive guide to metadata and its importance in web development.",
        content: r#"
      <h2>What is Metadata?</h2>
      <p>Metadata is data that describes other data. In web development, metadata provides information about a web page that is not visible to users but is important for search engines and other systems.</p>

      <h3>Types of Metadata</h3>
      <ul>
        <li><strong>Title tags:</strong> The title of the page</li>
        <li><strong>Meta descriptions:</strong> Brief descriptions of page content</li>
        <li><strong>Open Graph tags:</strong> For social media sharing</li>
        <li><strong>Twitter Cards:</strong> For Twitter sharing</li>
        <li><strong>Structured data:</strong> Machine-readable information</li>
      </ul>

      <h3>Why Metadata Matters</h3>
      <p>Proper metadata helps search engines understand your content, improve rankings, and enhances social media sharing.</p>

      <h3>Best Practices</h3>
      <p>Follow best practices for metadata to ensure optimal search results and social sharing.</p>

      <h3>Conclusion</h3>
      <p>Metadata is essential for web development and search engine optimization. Understanding its importance and best practices is crucial for creating engaging and user-friendly websites.</p>
    "#,
    },
    Post {
        id: "seo-best-practices",
        title: "SEO Best Practices for Devs",
        date: "2026-01-01",
        author: "Nami",
        excerpt: "Essential SEO techniques every developer should know.",
        content: r#"
      <h2>SEO Fundamentals</h2>
      <p>Search Engine Optimization (SEO) is crucial for making your website discoverable. Here are some best practices.</p>

      <h3>Technical SEO</h3>
      <ul>
        <li>Fast loading times</li>
        <li>Mobile-friendly design</li>
        <li>Clean URL structure</li>
        <li>Proper heading hierarchy</li>
        <li>Alt text for images</li>
      </ul>

      <h3>Content SEO</h3>
      <ul>
        <li>Keyword research and optimization</li>
        <li>High-quality, original content</li>
        <li>Internal linking</li>
        <li>Regular content updates</li>
      </ul>

      <h3>Next.js SEO Features</h3>
      <p>Next.js provides excellent built-in SEO features including server-side rendering, static site generation, image optimization, and flexible metadata configuration.</p>
    "#,
    },
];
