use dto::login::LoginCredentials;
use rocket::Request;
use rocket::form::Form;
use rocket::response::Redirect;
use rocket_dyn_templates::{Template, context};

#[derive(FromForm)]
pub struct LoginForm {
    email: String,
    password: String,
}

impl From<LoginForm> for LoginCredentials {
    fn from(form: LoginForm) -> Self {
        LoginCredentials::new(form.email, form.password)
    }
}

#[get("/")]
pub async fn index() -> Template {
    Template::render(
        "index",
        context! {
            title: "Skill gap analysis"
        },
    )
}

#[get("/analysis")]
pub async fn analysis() -> Template {
    Template::render(
        "analysis",
        context! {
            title: "Analyze your resume"
        },
    )
}

#[get("/login")]
pub async fn login() -> Template {
    Template::render(
        "login",
        context! {
            title: "Login"
        },
    )
}

// region Accounts
// No account is created nor checked: the login state only lives in the browser session.
#[post("/login", data = "<form>")]
pub async fn login_user(form: Form<LoginForm>) -> Redirect {
    let credentials: LoginCredentials = form.into_inner().into();
    log::debug!("Login form posted: {credentials:?}");
    Redirect::to(uri!(index))
}

#[post("/signup", data = "<form>")]
pub async fn signup_user(form: Form<LoginForm>) -> Redirect {
    let credentials: LoginCredentials = form.into_inner().into();
    log::debug!("Signup form posted: {credentials:?}");
    Redirect::to(uri!(login))
}
// endregion

#[get("/feedback")]
pub async fn feedback() -> Template {
    Template::render(
        "feedback",
        context! {
            title: "Feedback"
        },
    )
}

#[get("/about")]
pub async fn about() -> Template {
    Template::render(
        "about",
        context! {
            title: "About"
        },
    )
}

#[catch(404)]
pub async fn not_found(req: &Request<'_>) -> Template {
    Template::render(
        "error/404",
        context! {
            uri: req.uri()
        },
    )
}
