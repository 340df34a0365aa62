pub const DASHBOARD: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    min-height: 100vh;
    padding: 20px;
}
.container { max-width: 1200px; margin: 0 auto; }
.header { text-align: center; color: white; margin-bottom: 30px; }
.header h1 { font-size: 2.5em; margin-bottom: 10px; text-shadow: 2px 2px 4px rgba(0,0,0,0.2); }
.header p { font-size: 1.2em; opacity: 0.9; }
.stats { display: flex; justify-content: center; gap: 20px; margin-bottom: 30px; flex-wrap: wrap; }
.stat-card {
    background: white;
    padding: 20px 30px;
    border-radius: 10px;
    box-shadow: 0 4px 6px rgba(0,0,0,0.1);
    text-align: center;
}
.stat-card .number { font-size: 2em; font-weight: bold; color: #667eea; }
.stat-card .label { color: #666; margin-top: 5px; }
.repo-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(350px, 1fr));
    gap: 20px;
    margin-top: 20px;
}
.repo-card {
    background: white;
    border-radius: 12px;
    padding: 20px;
    box-shadow: 0 4px 6px rgba(0,0,0,0.1);
    transition: transform 0.2s, box-shadow 0.2s;
}
.repo-card:hover { transform: translateY(-5px); box-shadow: 0 8px 15px rgba(0,0,0,0.2); }
.repo-header { display: flex; align-items: center; margin-bottom: 15px; }
.repo-icon { font-size: 2em; margin-right: 10px; }
.repo-name { font-size: 1.3em; font-weight: bold; color: #333; margin-bottom: 5px; }
.repo-full-name { color: #666; font-size: 0.9em; }
.repo-description { color: #666; margin: 10px 0; font-size: 0.9em; }
.repo-info { margin-top: 15px; padding-top: 15px; border-top: 1px solid #eee; }
.info-item { display: flex; justify-content: space-between; margin-bottom: 8px; font-size: 0.9em; }
.info-label { color: #666; font-weight: 500; }
.info-value { color: #333; }
.language-badge {
    display: inline-block;
    background: #667eea;
    color: white;
    padding: 4px 10px;
    border-radius: 12px;
    font-size: 0.8em;
    margin-top: 10px;
}
.repo-link {
    display: inline-block;
    margin-top: 15px;
    color: #667eea;
    text-decoration: none;
    font-weight: 500;
    transition: color 0.2s;
}
.repo-link:hover { color: #764ba2; text-decoration: underline; }
.empty-state { text-align: center; color: white; padding: 60px 20px; font-size: 1.2em; }
"#;

pub const ERROR: &str = r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    min-height: 100vh;
    display: flex;
    justify-content: center;
    align-items: center;
    padding: 20px;
}
.error-card {
    background: white;
    padding: 40px;
    border-radius: 12px;
    box-shadow: 0 4px 6px rgba(0,0,0,0.1);
    text-align: center;
    max-width: 500px;
}
.error-icon { font-size: 4em; margin-bottom: 20px; }
.error-card h1 { color: #e74c3c; margin-bottom: 15px; }
.error-card p { color: #666; font-size: 1.1em; }
"#;
