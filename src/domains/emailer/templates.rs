//! HTML/text bodies for the transactional emails.
//!
//! All user-supplied fields pass through [`escape_html`] before
//! interpolation. The one exception is the generic endpoint's
//! `html_content`, which is the caller's own document.

use chrono::{Datelike, Utc};

pub const LOGO_URL: &str = "https://loufranktv.com/public/901661ac-f28e-4815-8069-61ae5363a100/logo-color.png";

/// Substring that marks caller HTML as already wrapped in the branded shell.
pub const WRAP_MARKER: &str = "<div class=\"container\">";

const LIGHT_STYLE: &str = r#"
body { font-family: 'Arial', sans-serif; line-height: 1.6; margin: 0; padding: 0; background-color: #f9f9f9; }
.container { max-width: 600px; margin: 0 auto; background-color: #ffffff; border-radius: 8px; overflow: hidden; box-shadow: 0 0 20px rgba(0, 0, 0, 0.1); }
.header { background: #17d1e0; padding: 20px; text-align: center; }
.logo { height: 70px; width: auto; }
.content { padding: 30px; color: #333333; font-size: 16px; }
.footer { background-color: #f0f0f0; padding: 20px; text-align: center; font-size: 14px; color: #555555; border-top: 1px solid #e0e0e0; }
h1, h2 { color: #222222; margin-top: 0; font-weight: bold; }
strong { color: #0891b2; font-weight: bold; }
.divider { height: 2px; background: linear-gradient(to right, #ffffff, #17d1e0, #ffffff); margin: 20px 0; }
"#;

const DARK_STYLE: &str = r#"
body { font-family: 'Arial', sans-serif; line-height: 1.6; color: #e2e8f0; margin: 0; padding: 0; background-color: #0f0f0f; }
.container { max-width: 600px; margin: 0 auto; background-color: #0a0a0a; border-radius: 8px; overflow: hidden; }
.header { background: linear-gradient(135deg, #000000, #1a1a1a); padding: 20px; text-align: center; border-bottom: 1px solid #333; }
.logo { height: 60px; width: auto; }
.content { padding: 30px; }
.footer { background-color: #0a0a0a; padding: 20px; text-align: center; font-size: 12px; color: #6c7280; border-top: 1px solid #333; }
h1, h2 { color: #ffffff; margin-top: 0; }
.highlight { color: #17d1e0; }
.divider { height: 1px; background: linear-gradient(to right, transparent, #333, transparent); margin: 20px 0; }
.button { background: #17d1e0; color: #ffffff; text-decoration: none; padding: 14px 30px; border-radius: 5px; font-weight: bold; display: inline-block; margin: 25px 0; font-size: 16px; }
a { color: #0891b2; text-decoration: underline; font-weight: bold; }
"#;

/// Minimal HTML entity escaping for fields interpolated into email bodies.
pub fn escape_html(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  for c in input.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(c),
    }
  }
  out
}

fn current_year() -> i32 {
  Utc::now().year()
}

fn footer() -> String {
  format!(
    r#"<div class="footer">
  <p>&copy; {year} LouFrank TV. All rights reserved.</p>
  <p>Premium IPTV Service | 16,000+ Channels | Global Coverage</p>
</div>"#,
    year = current_year()
  )
}

/// Notification sent to the support inbox for a contact-form submission.
pub fn contact_notification(name: &str, email: &str, subject: &str, message: &str) -> String {
  format!(
    r#"<html>
<head>
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<style>{style}</style>
</head>
<body>
<div class="container">
  <div class="header"><img class="logo" src="{logo}" alt="LouFrank TV Logo"></div>
  <div class="content">
    <h2>New Contact Form Submission</h2>
    <div class="divider"></div>
    <p><strong>From:</strong> {name} ({email})</p>
    <p><strong>Subject:</strong> {subject}</p>
    <p><strong>Message:</strong></p>
    <p>{message}</p>
  </div>
  {footer}
</div>
</body>
</html>"#,
    style = LIGHT_STYLE,
    logo = LOGO_URL,
    name = escape_html(name),
    email = escape_html(email),
    subject = escape_html(subject),
    message = escape_html(message),
    footer = footer(),
  )
}

/// Welcome email sent to a newly registered user.
pub fn welcome_html(name: &str, site_base_url: &str) -> String {
  format!(
    r#"<html>
<head>
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<style>{style}</style>
</head>
<body>
<div class="container">
  <div class="header"><img class="logo" src="{logo}" alt="LouFrank TV Logo"></div>
  <div class="content">
    <h1>Welcome to <span class="highlight">LouFrank TV</span>!</h1>
    <div class="divider"></div>
    <p>Hello {name},</p>
    <p>Thank you for joining LouFrank TV! We're excited to have you as part of our community of premium entertainment enthusiasts.</p>
    <p>With your new account, you now have access to:</p>
    <ul>
      <li>Over <strong>16,000 HD and FHD channels</strong> from more than 50 countries</li>
      <li>Thousands of <strong>on-demand movies and TV series</strong></li>
      <li><strong>Ultra-fast zapping</strong> with no freezing</li>
      <li><strong>Global access</strong> from any device</li>
    </ul>
    <div style="text-align: center;">
      <a href="{base}/setup-guides" class="button">Set Up Your Devices</a>
    </div>
    <p>If you have any questions, contact our support team at <a href="mailto:support@loufranktv.com">support@loufranktv.com</a>.</p>
    <p>Enjoy the premium experience!</p>
    <p>The LouFrank TV Team</p>
  </div>
  {footer}
</div>
</body>
</html>"#,
    style = DARK_STYLE,
    logo = LOGO_URL,
    name = escape_html(name),
    base = site_base_url,
    footer = footer(),
  )
}

/// Plain-text alternative for the welcome email.
pub fn welcome_text(name: &str, site_base_url: &str) -> String {
  format!(
    "Welcome to LouFrank TV!\n\n\
     Hello {name},\n\n\
     Thank you for joining LouFrank TV! We're excited to have you as part of our community of premium entertainment enthusiasts.\n\n\
     With your new account, you now have access to:\n\
     - Over 16,000 HD and FHD channels from more than 50 countries\n\
     - Thousands of on-demand movies and TV series\n\
     - Ultra-fast zapping with no freezing\n\
     - Global access from any device\n\n\
     Set up your devices: {base}/setup-guides\n\n\
     If you have any questions, contact our support team at support@loufranktv.com.\n\n\
     Enjoy the premium experience!\n\n\
     The LouFrank TV Team\n",
    name = name,
    base = site_base_url,
  )
}

/// Notification sent to the support inbox for a free-trial request.
pub fn trial_notification(name: &str, email: &str, phone: Option<&str>) -> String {
  let phone_row = match phone {
    Some(phone) => format!(
      r#"<li style="margin-bottom: 10px;"><strong>Phone:</strong> {}</li>"#,
      escape_html(phone)
    ),
    None => String::new(),
  };

  format!(
    r#"<html>
<head>
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>New Trial Request for LouFrank TV</title>
<style>{style}</style>
</head>
<body>
<div class="container">
  <div class="header"><img class="logo" src="{logo}" alt="LouFrank TV Logo"></div>
  <div class="content">
    <p>Hello Owner,</p>
    <p>Someone requested a free trial:</p>
    <ul style="list-style-type: none; padding: 0;">
      <li style="margin-bottom: 10px;"><strong>Name:</strong> {name}</li>
      <li style="margin-bottom: 10px;"><strong>Email:</strong> {email}</li>
      {phone_row}
    </ul>
    <p>Please follow up as soon as possible.</p>
  </div>
  {footer}
</div>
</body>
</html>"#,
    style = LIGHT_STYLE,
    logo = LOGO_URL,
    name = escape_html(name),
    email = escape_html(email),
    phone_row = phone_row,
    footer = footer(),
  )
}

/// Whether caller HTML already carries the branded shell.
pub fn is_prewrapped(html: &str) -> bool {
  html.contains(WRAP_MARKER)
}

/// Embeds caller HTML in the default branded shell.
pub fn branded_shell(inner_html: &str) -> String {
  format!(
    r#"<html>
<head>
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<style>{style}</style>
</head>
<body>
<div class="container">
  <div class="header"><img class="logo" src="{logo}" alt="LouFrank TV Logo"></div>
  <div class="content">
    {inner}
  </div>
  {footer}
</div>
</body>
</html>"#,
    style = DARK_STYLE,
    logo = LOGO_URL,
    inner = inner_html,
    footer = footer(),
  )
}
