use dioxus::prelude::*;
use types::attendance::AttendanceRecord;
use types::roster::User;
use types::settings::Settings;

#[post("/api/users/list")]
pub async fn list_users() -> ServerFnResult<Vec<User>> {
    Ok(client::APPLIANCE.list_users().await?)
}

#[post("/api/attendance/list")]
pub async fn list_attendance() -> ServerFnResult<Vec<AttendanceRecord>> {
    Ok(client::APPLIANCE.list_attendance().await?)
}

#[post("/api/users/register")]
pub async fn register_user(id: String, name: String) -> ServerFnResult<()> {
    client::APPLIANCE.register_user(&id, &name).await?;
    Ok(())
}

#[post("/api/users/delete")]
pub async fn delete_user(id: String) -> ServerFnResult<()> {
    client::APPLIANCE.delete_user(&id).await?;
    Ok(())
}

#[post("/api/users/reset-absences")]
pub async fn reset_user_absences(id: String) -> ServerFnResult<()> {
    client::APPLIANCE.reset_user_absences(&id).await?;
    Ok(())
}

#[post("/api/capture-face")]
pub async fn capture_face(user_id: String) -> ServerFnResult<()> {
    client::APPLIANCE.capture_face(&user_id).await?;
    Ok(())
}

#[post("/api/settings/save")]
pub async fn save_settings(settings: Settings) -> ServerFnResult<()> {
    client::APPLIANCE.save_settings(&settings).await?;
    Ok(())
}

#[post("/api/system/reset")]
pub async fn reset_system() -> ServerFnResult<()> {
    client::APPLIANCE.reset_system().await?;
    Ok(())
}
