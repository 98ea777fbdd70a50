pub mod user;

/*
 A user is the only record Blogly keeps. image_url is never empty once stored:
 the web layer substitutes the placeholder before insert/update.
 */
