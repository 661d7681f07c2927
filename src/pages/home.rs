//! Landing and about pages.

use super::Page;
use crate::{config::SiteConfig, meta};

const HOME_MAIN: &str = r#"<main class="bg-white grid place-content-center">
  <section class="mx-auto w-screen max-w-7xl px-4 py-16 sm:px-6 sm:py-24 lg:px-8 lg:py-32">
    <div class="mx-auto max-w-prose text-center">
      <h1 class="text-4xl font-bold text-gray-900 sm:text-5xl">
        Learn Next.js
        <strong class="text-indigo-600"> SEO </strong>
        techniques and best practices
      </h1>
      <p class="mt-4 text-base text-pretty text-gray-700 sm:text-lg/relaxed">
        Get indexed faster on search engines and optimize for Core Web Vitals
      </p>
      <div class="mt-4 flex justify-center gap-4 sm:mt-6">
        <a class="inline-block rounded border border-indigo-600 bg-indigo-600 px-5 py-3 font-medium text-white shadow-sm transition-colors hover:bg-indigo-700" href="/about">Get Started</a>
        <a class="inline-block rounded border border-gray-200 px-5 py-3 font-medium text-gray-700 shadow-sm transition-colors hover:bg-gray-50 hover:text-gray-900" href="https://github.com/eneax/nextjs-seo">View on GitHub</a>
      </div>
    </div>
  </section>
</main>"#;

const ABOUT_MAIN: &str = r#"<main class="container mx-auto px-4 py-8">
  <h1 class="text-4xl font-bold mb-6">About</h1>
  <div class="prose max-w-none">
    <p class="text-lg mb-4">This project is designed to showcase how to improve your Next.js app so that it gets indexed faster on search engines and optimizes for Core Web Vitals.</p>
    <p class="mb-4">This page demonstrates how static routes are handled and how you can add metadata like title, description, and Open Graph tags to improve search engine optimization.</p>
    <h2 class="text-2xl font-semibold mb-3">Server Components</h2>
    <ul class="list-disc pl-6 mb-4">
      <li>Use server components whenever possible.</li>
      <li>When you need to add some interactivity (buttons, hooks), use separate client components.</li>
      <li>Do not turn the entire page into a client component. Create a new component and make it a client component by adding `use client` at the top of the file.</li>
      <li>The `Navigation` component is a client component because it uses the `usePathname` hook.</li>
      <li>Keep in mind that when a search engine bot visits your app, it wants to see the static HTML with all the tags, headers, metadata, links, etc.</li>
      <li>If your page is client side rendered, the info needed by the bot is not there yet. It will be added later by making a JavaScript call.</li>
    </ul>
  </div>
</main>"#;

pub fn home(config: &SiteConfig) -> Page {
    Page {
        path: "/".into(),
        metadata: meta::home(config),
        main: HOME_MAIN.into(),
    }
}

pub fn about(config: &SiteConfig) -> Page {
    Page {
        path: "/about".into(),
        metadata: meta::about(config),
        main: ABOUT_MAIN.into(),
    }
}
