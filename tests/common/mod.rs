//! Shared page fixtures for integration tests.

#![allow(dead_code)]

/// A trimmed-down listing page laid out like a live storefront page.
pub const CHESS_PRO_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Chess Pro - Apps on Google Play</title>
  <script type="application/ld+json">
  {"@context":"https://schema.org","@type":"SoftwareApplication","name":"Chess Pro",
   "aggregateRating":{"@type":"AggregateRating","ratingValue":4.5,"ratingCount":"1200"},
   "applicationCategory":"GAME"}
  </script>
</head>
<body>
  <div class="hero">
    <img alt="Icon image" src="//play-lh.example/icon=s240">
    <h1 itemprop="name">Chess Pro</h1>
    <div class="dev">
      <a href="/store/apps/dev?id=5700313618786177705"><span>Acme Games</span></a>
    </div>
    <div class="badges"><span>Contains ads</span><span>In-app purchases</span></div>
  </div>
  <div class="gallery">
    <img alt="Screenshot image" src="//play-lh.example/shot1">
    <img alt="Screenshot image" src="https://play-lh.example/shot2">
    <img alt="Screenshot" src="//play-lh.example/shot3">
  </div>
  <section>
    <header><div><h2>About this game</h2></div></header>
    <div>
      <meta itemprop="description" content="Chess for everyone">
      <div class="synopsis">Play chess against friends.<br>Solve daily puzzles.</div>
    </div>
  </section>
  <section>
    <header><div><h2>Updated on</h2></div></header>
    <div><div class="meta-label">Updated on</div><div class="meta-value">Mar 15, 2024</div></div>
  </section>
  <section>
    <header><div><h2>What's new</h2></div></header>
    <div><div itemprop="description">Bug fixes<br>New puzzle pack</div></div>
  </section>
  <section>
    <header><div><h2>App support</h2></div></header>
    <div class="support">
      <div><div>Website</div><div>https://acme.example</div></div>
      <div><div>Email</div><div>support@acme.example</div></div>
      <div><div>Address</div><div>1 Main St, Springfield</div></div>
      <div><div>Privacy policy</div><div>https://acme.example/privacy</div></div>
    </div>
  </section>
  <section>
    <header><div><h2>More by Acme Games</h2></div></header>
    <div class="grid">
      <div><a href="/store/apps/details?id=com.acme.checkers">Checkers</a></div>
      <div><a href="/store/apps/details?id=com.acme.go">Go</a></div>
      <div><a href="/store/apps/details?id=com.acme.checkers">Checkers</a></div>
    </div>
  </section>
  <section>
    <header><div><h2>Similar apps</h2></div></header>
    <div class="grid">
      <div>
        <a href="/store/apps/details?id=com.foo.bar"><img alt="Thumbnail image" src="//x"></a>
      </div>
      <div><a href="/store/apps/details?id=com.foo.bar">Foo Bar</a></div>
      <div><a href="/store/apps/details?id=org.other.chess&amp;hl=en">Other Chess</a></div>
      <div><a href="https://example.com/ad">Sponsored</a></div>
    </div>
  </section>
</body>
</html>"#;

/// Minimal page carrying only the title heading.
pub const TITLE_ONLY_PAGE: &str = r#"<html><body><h1 itemprop="name">Chess Pro</h1></body></html>"#;
